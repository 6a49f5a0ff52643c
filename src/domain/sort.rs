// src/domain/sort.rs
use crate::domain::listing::Listing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recently created first.
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    /// Unrecognised keys leave the order alone.
    Unsorted,
}

impl SortKey {
    pub const CHOICES: [(SortKey, &'static str); 3] = [
        (SortKey::Newest, "Newest First"),
        (SortKey::PriceLow, "Price: Low to High"),
        (SortKey::PriceHigh, "Price: High to Low"),
    ];

    /// Never fails: anything unknown becomes `Unsorted`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "newest" => SortKey::Newest,
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            _ => SortKey::Unsorted,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Unsorted => "unsorted",
        }
    }
}

/// Stable: listings with equal keys keep their input order.
pub fn sort_listings(mut listings: Vec<Listing>, key: SortKey) -> Vec<Listing> {
    match key {
        SortKey::Newest => listings.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::PriceLow => listings.sort_by_key(|l| l.price),
        SortKey::PriceHigh => listings.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Unsorted => {}
    }
    listings
}
