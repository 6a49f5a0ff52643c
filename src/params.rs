// src/params.rs
use std::io::Read;
use std::str::FromStr;

use astra::Request;
use chrono::NaiveDate;
use url::form_urlencoded;

use crate::domain::filter::SearchFilters;
use crate::domain::listing::RoomType;
use crate::domain::new_listing::NewListingForm;
use crate::domain::sort::SortKey;
use crate::errors::ServerError;

const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Decoded `application/x-www-form-urlencoded` pairs, from a query string or a body.
/// Repeated keys are kept in order, which is how multi-selects arrive.
#[derive(Debug, Clone, Default)]
pub struct FormParams {
    pairs: Vec<(String, String)>,
}

impl FormParams {
    pub fn parse(raw: &[u8]) -> Self {
        Self {
            pairs: form_urlencoded::parse(raw).into_owned().collect(),
        }
    }

    pub fn from_query(req: &Request) -> Self {
        Self::parse(req.uri().query().unwrap_or("").as_bytes())
    }

    pub fn from_body(req: Request) -> Result<Self, ServerError> {
        let mut body = req.into_body();
        let mut raw = Vec::new();
        body.reader()
            .take(MAX_FORM_BYTES)
            .read_to_end(&mut raw)
            .map_err(|e| ServerError::BadRequest(format!("could not read form: {e}")))?;
        Ok(Self::parse(&raw))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Trimmed value, empty when missing.
    pub fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or("").trim().to_string()
    }

    /// Every non-blank value for `key`.
    pub fn all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Like `all`, but also splits each value on newlines (textarea input).
    pub fn lines(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .flat_map(|(_, v)| v.lines())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Checkbox semantics: present with any value other than "false"/"0".
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key).map(str::trim), Some(v) if !v.is_empty() && v != "false" && v != "0")
    }

    /// Blank means unset; anything else must parse.
    pub fn number<T: FromStr>(&self, key: &str) -> Result<Option<T>, ServerError> {
        self.parsed(key, "a whole number", |raw| raw.parse().ok())
    }

    pub fn date(&self, key: &str) -> Result<Option<NaiveDate>, ServerError> {
        self.parsed(key, "a date (YYYY-MM-DD)", |raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
        })
    }

    pub fn choice<T: FromStr>(&self, key: &str) -> Result<Option<T>, ServerError> {
        self.parsed(key, "one of the listed options", |raw| raw.parse().ok())
    }

    fn parsed<T>(
        &self,
        key: &str,
        expected: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>, ServerError> {
        match self.get(key).map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => parse(raw).map(Some).ok_or_else(|| {
                ServerError::BadRequest(format!("{key} must be {expected}, got {raw:?}"))
            }),
        }
    }
}

/// Everything the search pages read from the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub filters: SearchFilters,
    pub sort: SortKey,
}

impl SearchRequest {
    pub fn from_params(params: &FormParams) -> Result<Self, ServerError> {
        let room_types = params
            .all("room_type")
            .iter()
            .map(|raw| {
                raw.parse::<RoomType>()
                    .map_err(|e| ServerError::BadRequest(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let filters = SearchFilters {
            location: Some(params.text("location")).filter(|l| !l.is_empty()),
            min_price: params.number("min_price")?,
            max_price: params.number("max_price")?,
            room_types,
            amenities: params.all("amenity"),
            furnished: params.flag("furnished"),
            parking: params.flag("parking"),
            wifi: params.flag("wifi"),
            kitchen: params.flag("kitchen"),
            washroom: params.choice("washroom")?,
            gender: params.choice("gender")?,
            available_from: params.date("available_from")?,
            min_stay: params.number("min_stay")?,
        };

        Ok(Self {
            query: params.text("q"),
            filters,
            sort: params
                .get("sort")
                .map(SortKey::parse)
                .unwrap_or_default(),
        })
    }

    /// Query string reproducing this search, for links that keep it.
    pub fn to_query(&self) -> String {
        let f = &self.filters;
        let mut out = form_urlencoded::Serializer::new(String::new());

        if !self.query.is_empty() {
            out.append_pair("q", &self.query);
        }
        if let Some(location) = &f.location {
            out.append_pair("location", location);
        }
        if let Some(min) = f.min_price {
            out.append_pair("min_price", &min.to_string());
        }
        if let Some(max) = f.max_price {
            out.append_pair("max_price", &max.to_string());
        }
        for room_type in &f.room_types {
            out.append_pair("room_type", room_type.as_str());
        }
        for amenity in &f.amenities {
            out.append_pair("amenity", amenity);
        }
        for (on, key) in [
            (f.furnished, "furnished"),
            (f.parking, "parking"),
            (f.wifi, "wifi"),
            (f.kitchen, "kitchen"),
        ] {
            if on {
                out.append_pair(key, "on");
            }
        }
        if let Some(washroom) = f.washroom {
            out.append_pair("washroom", washroom.as_str());
        }
        if let Some(gender) = f.gender {
            out.append_pair("gender", gender.as_str());
        }
        if let Some(date) = f.available_from {
            out.append_pair("available_from", &date.format("%Y-%m-%d").to_string());
        }
        if let Some(months) = f.min_stay {
            out.append_pair("min_stay", &months.to_string());
        }
        out.append_pair("sort", self.sort.as_str());
        out.finish()
    }
}

/// Reads the owner's "add room" form. Malformed numbers and dates are a 400;
/// missing ones are left for validation to report.
pub fn new_listing_form(params: &FormParams) -> Result<NewListingForm, ServerError> {
    Ok(NewListingForm {
        title: params.text("title"),
        description: params.text("description"),
        price: params.number("price")?.unwrap_or(0),
        city: params.text("city"),
        area: params.text("area"),
        address: params.text("address"),
        room_type: params.choice("room_type")?.unwrap_or_default(),
        washroom: params.choice("washroom")?.unwrap_or_default(),
        gender: params.choice("gender")?.unwrap_or_default(),
        available_from: params.date("available_from")?,
        min_stay: params.number("min_stay")?.unwrap_or(0),
        owner_phone: params.text("owner_phone"),
        furnished: params.flag("furnished"),
        parking: params.flag("parking"),
        wifi: params.flag("wifi"),
        kitchen: params.flag("kitchen"),
        smoking_allowed: params.flag("smoking_allowed"),
        pets_allowed: params.flag("pets_allowed"),
        amenities: params.all("amenity"),
        professions: params.all("profession"),
        images: params.lines("images"),
    })
}
