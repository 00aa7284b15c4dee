//! Website and contact text blocks.

/// What the website offers, as explained to visitors by the website agent.
pub const WEBSITE_INFO: &str = r#"The Real Estate Website modern platform designed to cater to the luxury real estate market. Its primary purpose is to provide an elegant, user-centric, and responsive interface that facilitates the discovery, exploration, and engagement with high-end real estate properties. The website aims to bridge the gap between potential buyers, renters, or investors and a real estate company by offering a seamless digital experience. With a dark-themed aesthetic inspired by luxury, the website combines visual appeal with functionality, enabling users to browse properties, learn about the company, connect through a contact form, and stay updated via newsletters and social media. It serves as a digital storefront for a real estate business, emphasizing professionalism, accessibility, and user engagement across various devices.
Services Offered
The website provides a comprehensive set of services tailored to meet the needs of users interested in real estate, including:

Property Showcase: The core service of the website is its ability to display featured properties in an organized and visually appealing manner. Each property listing includes detailed information such as high-quality images, pricing, location details, and other relevant specifications, allowing users to explore available real estate options effectively.
Property Search with Filters: The website offers a robust search functionality that enables users to find properties based on specific criteria, such as location, price range, or property type. Filters enhance the user experience by allowing refined searches to match individual preferences.
Contact Form: A fully functional contact form with validation is provided, enabling users to reach out to the real estate company directly. This form is designed to capture inquiries, feedback, or requests for property viewings, ensuring seamless communication.
Company Information and Team Profiles: The "About" section provides detailed insights into the real estate company, its mission, and its team members. This service helps build trust by showcasing the expertise and professionalism of the company’s staff.
Customer Testimonials: The website includes a dedicated section for customer reviews and ratings, offering social proof to potential clients. This service highlights positive experiences from previous customers, enhancing credibility.
Newsletter Subscription: Users can subscribe to a newsletter via an email subscription form, allowing them to receive updates on new property listings, market trends, or company news.
Social Media Integration: The website incorporates social media links and sharing options, enabling users to follow the company on various platforms or share property listings with their networks, increasing engagement and reach.

Features of the Website
The website is equipped with 10 distinct features that enhance its functionality, user experience, and aesthetic appeal:

Modern Design: The website adopts a dark theme with luxury aesthetics, creating a visually striking and sophisticated interface that aligns with the high-end real estate market. The design emphasizes clean lines, elegant typography, and a premium look.
Fully Responsive: Optimized for all device sizes, the website ensures a seamless experience across mobile devices (screen width < 640px), tablets (640px - 1024px), and desktops (> 1024px). This responsiveness guarantees accessibility for users regardless of the device they use.
Interactive Components: The website incorporates dynamic elements such as hover effects, animations, and smooth transitions to enhance user engagement and provide a modern, interactive browsing experience.
Property Showcase: A dedicated section displays featured properties in a grid layout, complete with high-quality images, hover effects, and detailed information such as price, location, and property specifications. This feature is central to the website’s purpose of promoting real estate listings.
Contact Form: The contact form is multi-field, user-friendly, and includes validation to ensure accurate submissions. It serves as a direct communication channel for users to inquire about properties or services.
Team Section: The website includes a section showcasing company team member profiles, complete with photos and brief descriptions, fostering trust and transparency with potential clients.
Testimonials: A testimonials section highlights customer reviews and ratings, providing authentic feedback to build confidence in the company’s services.
Search Functionality: The property search feature allows users to filter listings based on specific parameters, making it easier to find properties that meet their needs.
Newsletter Subscription: An email subscription form enables users to sign up for newsletters, keeping them informed about new listings and company updates.
Social Media Integration: The website integrates social media links and sharing capabilities, allowing users to connect with the company on platforms like Twitter, Instagram, or Facebook and share properties with others.

Additional Technical Details
The website is built using a modern tech stack to ensure performance, scalability, and maintainability:

Framework: Next.js 14 with App Router for server-side rendering and optimized performance.
Language: TypeScript for type-safe and maintainable code.
Styling: Tailwind CSS for rapid, customizable, and responsive styling.
Icons: Lucide React for modern, scalable icons.
Images: Next.js Image Optimization for fast-loading, high-quality visuals.
Fonts: Inter from Google Fonts for clean and professional typography.

The project structure is organized to facilitate development and customization, with key directories such as app/ for core components, components/ for reusable UI elements, and public/ for static assets. The website can be customized by updating the color scheme in tailwind.config.js, replacing images in components, or modifying content such as company details and property information.
Conclusion
The Real Estate Website is a feature-rich, responsive, and visually appealing platform designed to showcase luxury properties and facilitate user engagement with a real estate company. Its services, including property showcases, search functionality, and direct communication channels, cater to users seeking premium real estate solutions. With 10 carefully crafted features, the website delivers a seamless and professional experience, making it an effective tool for both the company and its clients."#;

/// How to reach the agency and arrange a consultation.
pub const CONTACT_INFO: &str = r#"For assistance, contact us at:
- Email: support@yourrealestatewebsite.com
- Phone: +1-123-456-7890
Please mention the property name or type you're interested in, and we'll arrange a consultation at your preferred time."#;
