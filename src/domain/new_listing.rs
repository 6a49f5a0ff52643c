// src/domain/new_listing.rs
use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::listing::{
    Availability, Features, Gender, Listing, Location, Preferences, RoomType, WashroomType,
};
use crate::domain::status::ModerationStatus;
use crate::domain::user::User;
use crate::errors::ServerError;

/// What an owner submits from the "add room" page.
#[derive(Debug, Clone, Default, Validate)]
pub struct NewListingForm {
    #[validate(length(min = 10, message = "Title must be at least 10 characters."))]
    pub title: String,

    #[validate(length(min = 50, message = "Description must be at least 50 characters."))]
    pub description: String,

    #[validate(range(min = 1000, message = "Price must be at least NPR 1,000."))]
    pub price: u32,

    #[validate(length(min = 1, message = "City is required."))]
    pub city: String,

    #[validate(length(min = 1, message = "Area is required."))]
    pub area: String,

    #[validate(length(min = 10, message = "Address must be at least 10 characters."))]
    pub address: String,

    pub room_type: RoomType,
    pub washroom: WashroomType,
    pub gender: Gender,

    #[validate(required(message = "Available-from date is required."))]
    pub available_from: Option<NaiveDate>,

    #[validate(range(min = 1, message = "Minimum stay must be at least 1 month."))]
    pub min_stay: u32,

    #[validate(length(min = 10, message = "Phone number must be at least 10 characters."))]
    pub owner_phone: String,

    pub furnished: bool,
    pub parking: bool,
    pub wifi: bool,
    pub kitchen: bool,
    pub smoking_allowed: bool,
    pub pets_allowed: bool,

    pub amenities: Vec<String>,
    pub professions: Vec<String>,

    #[validate(length(min = 1, message = "Add at least one image URL."))]
    pub images: Vec<String>,
}

impl NewListingForm {
    /// Validates and builds a pending listing owned by `owner`.
    /// Rule violations come back as `ServerError::Validation`.
    pub fn into_listing(
        self,
        id: String,
        owner: &User,
        now: NaiveDateTime,
    ) -> Result<Listing, ServerError> {
        self.validate()?;
        let Some(available_from) = self.available_from else {
            let mut errors = ValidationErrors::new();
            errors.add("available_from", ValidationError::new("required"));
            return Err(ServerError::Validation(errors));
        };

        Ok(Listing {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price,
            location: Location {
                area: self.area.trim().to_string(),
                city: self.city.trim().to_string(),
                address: self.address.trim().to_string(),
                coordinates: None,
            },
            room_type: self.room_type,
            amenities: self.amenities,
            images: self.images,
            owner_id: owner.id.clone(),
            owner_name: owner.name.clone(),
            owner_phone: self.owner_phone.trim().to_string(),
            status: ModerationStatus::Pending,
            created_at: now,
            updated_at: now,
            availability: Availability {
                available: true,
                available_from,
                min_stay: self.min_stay,
            },
            features: Features {
                furnished: self.furnished,
                parking: self.parking,
                wifi: self.wifi,
                kitchen: self.kitchen,
                washroom: self.washroom,
            },
            preferences: Preferences {
                gender: self.gender,
                professions: self.professions,
                smoking_allowed: self.smoking_allowed,
                pets_allowed: self.pets_allowed,
            },
        })
    }
}

/// First message per field, for rendering next to the inputs.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .or_else(|| errs.first().map(|e| e.code.to_string()))?;
            Some((field.to_string(), message))
        })
        .collect()
}
