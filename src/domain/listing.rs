// src/domain/listing.rs
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::status::{ModerationAction, ModerationStatus, TransitionError};

labelled_enum!(RoomType, "room type" {
    Single => "single",
    Double => "double",
    Shared => "shared",
    Studio => "studio",
    Apartment => "apartment",
});

labelled_enum!(WashroomType, "washroom type" {
    Attached => "attached",
    Shared => "shared",
    Common => "common",
});

labelled_enum!(
    /// Tenant gender preference. `Any` on a listing accepts every searcher.
    Gender, "gender" {
        Male => "male",
        Female => "female",
        Any => "any",
    }
);

impl Default for RoomType {
    fn default() -> Self {
        RoomType::Single
    }
}

impl Default for WashroomType {
    fn default() -> Self {
        WashroomType::Shared
    }
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Any
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub area: String,
    pub city: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub available: bool,
    pub available_from: NaiveDate,
    /// Months.
    pub min_stay: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub furnished: bool,
    pub parking: bool,
    pub wifi: bool,
    pub kitchen: bool,
    pub washroom: WashroomType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub gender: Gender,
    #[serde(rename = "profession", default)]
    pub professions: Vec<String>,
    pub smoking_allowed: bool,
    pub pets_allowed: bool,
}

/// A single room offered for rent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Monthly rent in NPR.
    pub price: u32,
    pub location: Location,
    pub room_type: RoomType,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// First entry is the cover image.
    #[serde(default)]
    pub images: Vec<String>,
    pub owner_id: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub status: ModerationStatus,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub updated_at: NaiveDateTime,
    pub availability: Availability,
    pub features: Features,
    pub preferences: Preferences,
}

impl Listing {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }

    /// Moves the listing through the moderation state machine and stamps `updated_at`.
    pub fn moderate(
        &mut self,
        action: ModerationAction,
        now: NaiveDateTime,
    ) -> Result<ModerationStatus, TransitionError> {
        self.status = self.status.apply(action)?;
        self.updated_at = now;
        Ok(self.status)
    }
}

/// Choices offered by the search and submission forms.
pub const CITIES: &[&str] = &[
    "Kathmandu", "Pokhara", "Lalitpur", "Bhaktapur", "Biratnagar",
    "Birgunj", "Dharan", "Butwal", "Nepalgunj", "Hetauda",
];

pub const AREAS: &[&str] = &[
    "Thamel", "New Baneshwor", "Balaju", "Kirtipur", "Pulchowk", "Baneshwor",
    "Dillibazar", "Maharajgunj", "Budhanilkantha", "Gongabu", "Kalanki", "Koteshwor",
];

pub const AMENITIES: &[&str] = &[
    "WiFi", "Parking", "Kitchen Access", "Laundry", "Security",
    "Water Tank", "Backup Power", "Garden/Terrace", "Study Table", "Wardrobe",
];

pub const PROFESSIONS: &[&str] = &[
    "Student", "Professional", "Engineer", "Doctor", "Teacher",
    "Business", "IT Professional", "Government Employee",
];

/// Listing dates arrive either as plain `YYYY-MM-DD` or as RFC 3339 instants.
pub mod timestamp {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
            return Some(dt);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.format("%Y-%m-%dT%H:%M:%SZ").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp {raw:?}")))
    }
}
