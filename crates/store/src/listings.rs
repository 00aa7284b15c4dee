//! Property listings.

use serde::Serialize;

/// Whether a listing is offered for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DealType {
    Sale,
    Rent,
}

/// A single property record.
///
/// Field names on the wire follow the record shape the chat front-end and
/// the prompts were written against (`type`, `typeofproperty`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyListing {
    pub name: &'static str,
    pub description: &'static str,
    /// Sale price, or monthly rent, in US dollars.
    pub price: u64,
    #[serde(rename = "type")]
    pub deal_type: DealType,
    #[serde(rename = "typeofproperty")]
    pub property_type: &'static str,
    pub location: &'static str,
    pub beds: u32,
    pub baths: u32,
    pub sqft: u32,
    pub features: &'static [&'static str],
}

pub static SALE_LISTINGS: &[PropertyListing] = &[
    PropertyListing {
        name: "Modern Luxury Villa",
        description: "An architectural masterpiece featuring floor-to-ceiling glass, open concept living, and an infinity-edge pool overlooking Beverly Hills.",
        price: 2_500_000,
        deal_type: DealType::Sale,
        property_type: "villa",
        location: "Beverly Hills, CA",
        beds: 5,
        baths: 4,
        sqft: 4200,
        features: &["Open kitchen", "Smart home", "Home theater", "3-car garage"],
    },
    PropertyListing {
        name: "Luxury Family Home",
        description: "Spacious family residence with bright interiors, landscaped backyard, and a quiet cul-de-sac address.",
        price: 750_000,
        deal_type: DealType::Sale,
        property_type: "single_family",
        location: "Suburban Heights, CA",
        beds: 4,
        baths: 3,
        sqft: 2800,
        features: &["Family room", "Breakfast nook", "Primary suite balcony"],
    },
    PropertyListing {
        name: "Investment Property",
        description: "Turn-key investment near the university, strong rental history and low vacancy.",
        price: 450_000,
        deal_type: DealType::Sale,
        property_type: "townhouse",
        location: "University Area, CA",
        beds: 3,
        baths: 2,
        sqft: 1600,
        features: &["Updated kitchen", "Hardwood floors"],
    },
    PropertyListing {
        name: "Historic Townhouse",
        description: "Classic 1925 townhouse meticulously updated while preserving original character.",
        price: 1_200_000,
        deal_type: DealType::Sale,
        property_type: "townhouse",
        location: "Historic District, CA",
        beds: 5,
        baths: 4,
        sqft: 3200,
        features: &["Crown molding", "Chef kitchen", "Library"],
    },
    PropertyListing {
        name: "Modern Condo",
        description: "Contemporary condo in the heart of downtown with amenities and parking.",
        price: 380_000,
        deal_type: DealType::Sale,
        property_type: "condo",
        location: "Downtown, CA",
        beds: 2,
        baths: 2,
        sqft: 1100,
        features: &["Balcony", "Walk-in closet"],
    },
    PropertyListing {
        name: "Waterfront Estate",
        description: "Stunning waterfront estate with private dock and guest house.",
        price: 2_500_000,
        deal_type: DealType::Sale,
        property_type: "estate",
        location: "Harbor View, CA",
        beds: 6,
        baths: 5,
        sqft: 4500,
        features: &["Guest house", "Private dock", "Gourmet kitchen"],
    },
    PropertyListing {
        name: "Mountain View Cabin",
        description: "Cozy cabin retreat with panoramic mountain views and modern finishes.",
        price: 590_000,
        deal_type: DealType::Sale,
        property_type: "single_family",
        location: "Highland Ridge, CO",
        beds: 3,
        baths: 2,
        sqft: 1700,
        features: &["Fireplace", "Wraparound deck"],
    },
];

pub static RENT_LISTINGS: &[PropertyListing] = &[
    PropertyListing {
        name: "Waterfront Condo",
        description: "Stylish condo with a private balcony facing the harbor, concierge service, and residents-only fitness center.",
        price: 3200,
        deal_type: DealType::Rent,
        property_type: "condo",
        location: "Harbor View, CA",
        beds: 2,
        baths: 2,
        sqft: 1400,
        features: &["Balcony", "Chef kitchen", "In-unit laundry"],
    },
    PropertyListing {
        name: "Cozy Studio Loft",
        description: "Charming loft with exposed brick and high ceilings in the vibrant Arts District.",
        price: 1800,
        deal_type: DealType::Rent,
        property_type: "studio",
        location: "Arts District, CA",
        beds: 1,
        baths: 1,
        sqft: 800,
        features: &["High ceilings", "Exposed brick"],
    },
    PropertyListing {
        name: "Modern Downtown Apartment",
        description: "Bright corner unit apartment with city skyline views and quick access to transit.",
        price: 2500,
        deal_type: DealType::Rent,
        property_type: "apartment",
        location: "Downtown, City Center",
        beds: 2,
        baths: 2,
        sqft: 1200,
        features: &["Floor-to-ceiling windows", "Quartz counters"],
    },
    PropertyListing {
        name: "Family Townhouse",
        description: "Three-bedroom townhouse with private patio and community park access.",
        price: 4500,
        deal_type: DealType::Rent,
        property_type: "townhouse",
        location: "Suburban Heights, CA",
        beds: 3,
        baths: 3,
        sqft: 1800,
        features: &["Private patio", "Attached garage"],
    },
    PropertyListing {
        name: "Luxury Penthouse",
        description: "Opulent penthouse with private elevator access and skyline terrace.",
        price: 8000,
        deal_type: DealType::Rent,
        property_type: "apartment",
        location: "Financial District, CA",
        beds: 3,
        baths: 3,
        sqft: 2200,
        features: &["Private elevator", "Terrace", "Wine fridge"],
    },
    PropertyListing {
        name: "Garden Apartment",
        description: "Serene garden-level apartment with direct courtyard access.",
        price: 2200,
        deal_type: DealType::Rent,
        property_type: "apartment",
        location: "Park View, CA",
        beds: 2,
        baths: 1,
        sqft: 1100,
        features: &["Courtyard access", "Breakfast bar"],
    },
    PropertyListing {
        name: "Commercial Office Suite",
        description: "Flexible Class-A office suite with 12 private offices, reception, and kitchen.",
        price: 12_000,
        deal_type: DealType::Rent,
        property_type: "commercial",
        location: "Midtown, CA",
        beds: 0,
        baths: 2,
        sqft: 5000,
        features: &["Conference room", "Server room", "Reception"],
    },
];
