#![deny(unused)]
//! Static data store for Estate Chat.
//!
//! Read-only, process-lifetime collections of property listings and
//! website/contact text. Nothing here is ever mutated, so the store needs no
//! locking and is freely shared across concurrent requests.

pub mod content;
pub mod listings;

pub use listings::{DealType, PropertyListing};

/// Read-only accessor over the static datasets.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDataStore;

impl StaticDataStore {
    /// Create a handle to the static datasets.
    pub fn new() -> Self {
        Self
    }

    /// All listings offered for sale.
    pub fn sale_listings(&self) -> &'static [PropertyListing] {
        listings::SALE_LISTINGS
    }

    /// All listings offered for rent.
    pub fn rent_listings(&self) -> &'static [PropertyListing] {
        listings::RENT_LISTINGS
    }

    /// Description of the website, its services and features.
    pub fn website_info(&self) -> &'static str {
        content::WEBSITE_INFO
    }

    /// Contact details and scheduling instructions.
    pub fn contact_info(&self) -> &'static str {
        content::CONTACT_INFO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_sizes() {
        let store = StaticDataStore::new();
        assert_eq!(store.sale_listings().len(), 7);
        assert_eq!(store.rent_listings().len(), 7);
    }

    #[test]
    fn test_deal_types_match_collection() {
        let store = StaticDataStore::new();
        assert!(store.sale_listings().iter().all(|l| l.deal_type == DealType::Sale));
        assert!(store.rent_listings().iter().all(|l| l.deal_type == DealType::Rent));
    }

    #[test]
    fn test_listing_invariants() {
        let store = StaticDataStore::new();
        for listing in store.sale_listings().iter().chain(store.rent_listings()) {
            assert!(listing.sqft > 0, "{} has no floor area", listing.name);
            assert!(!listing.features.is_empty(), "{} has no features", listing.name);
            assert!(!listing.location.is_empty());
        }
    }

    #[test]
    fn test_text_blocks() {
        let store = StaticDataStore::new();
        assert!(store.website_info().contains("Property Showcase"));
        assert!(store.contact_info().contains("support@yourrealestatewebsite.com"));
        assert!(store.contact_info().contains("+1-123-456-7890"));
    }
}
