// src/domain/filter.rs
use chrono::NaiveDate;

use crate::domain::listing::{Gender, Listing, RoomType, WashroomType};

/// Search criteria. Every field is optional; unset fields impose no constraint
/// and all set fields must match (logical AND).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// Substring of the city or the area.
    pub location: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub room_types: Vec<RoomType>,
    /// Every requested amenity must be present on the listing.
    pub amenities: Vec<String>,
    pub furnished: bool,
    pub parking: bool,
    pub wifi: bool,
    pub kitchen: bool,
    pub washroom: Option<WashroomType>,
    pub gender: Option<Gender>,
    /// Listing must be available on or before this date.
    pub available_from: Option<NaiveDate>,
    /// Listing's minimum stay must not exceed this many months.
    pub min_stay: Option<u32>,
}

impl SearchFilters {
    /// Number of criteria that are actually set.
    pub fn active_count(&self) -> usize {
        [
            self.location.as_deref().is_some_and(|l| !l.is_empty()),
            self.min_price.is_some(),
            self.max_price.is_some(),
            !self.room_types.is_empty(),
            !self.amenities.is_empty(),
            self.furnished,
            self.parking,
            self.wifi,
            self.kitchen,
            self.washroom.is_some(),
            self.gender.is_some(),
            self.available_from.is_some(),
            self.min_stay.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            let needle = location.to_lowercase();
            if !contains_folded(&listing.location.city, &needle)
                && !contains_folded(&listing.location.area, &needle)
            {
                return false;
            }
        }

        if self.min_price.is_some_and(|min| listing.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| listing.price > max) {
            return false;
        }

        if !self.room_types.is_empty() && !self.room_types.contains(&listing.room_type) {
            return false;
        }

        if !self.amenities.iter().all(|a| listing.has_amenity(a)) {
            return false;
        }

        let features = &listing.features;
        if (self.furnished && !features.furnished)
            || (self.parking && !features.parking)
            || (self.wifi && !features.wifi)
            || (self.kitchen && !features.kitchen)
        {
            return false;
        }

        if self.washroom.is_some_and(|w| w != features.washroom) {
            return false;
        }

        if let Some(gender) = self.gender {
            let preference = listing.preferences.gender;
            if preference != Gender::Any && preference != gender {
                return false;
            }
        }

        if self
            .available_from
            .is_some_and(|date| listing.availability.available_from > date)
        {
            return false;
        }

        if self
            .min_stay
            .is_some_and(|months| listing.availability.min_stay > months)
        {
            return false;
        }

        true
    }
}

/// Case-insensitive substring match of `query` against title, area, city or description.
/// An empty query matches everything.
pub fn matches_query(listing: &Listing, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();

    contains_folded(&listing.title, &needle)
        || contains_folded(&listing.location.area, &needle)
        || contains_folded(&listing.location.city, &needle)
        || contains_folded(&listing.description, &needle)
}

/// The listings matching both the free-text query and every set filter, in input order.
pub fn filter_listings(listings: &[Listing], filters: &SearchFilters, query: &str) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| matches_query(l, query) && filters.matches(l))
        .cloned()
        .collect()
}

// `needle` is already lowercased.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
