use maud::{html, Markup};

use crate::domain::listing::{Gender, RoomType, WashroomType, AMENITIES, AREAS, CITIES};
use crate::domain::sort::SortKey;
use crate::params::SearchRequest;

fn washroom_label(w: WashroomType) -> &'static str {
    match w {
        WashroomType::Attached => "Attached",
        WashroomType::Shared => "Shared",
        WashroomType::Common => "Common",
    }
}

fn gender_label(g: Gender) -> &'static str {
    match g {
        Gender::Male => "Male only",
        Gender::Female => "Female only",
        Gender::Any => "No preference",
    }
}

/// GET form that submits back to `action` with the current criteria filled in.
pub fn search_filters(action: &str, search: &SearchRequest) -> Markup {
    let f = &search.filters;
    let location = f.location.as_deref().unwrap_or("");

    html! {
        form class="filters card" method="get" action=(action) {
            div class="filters-head" {
                h2 { "Filters" }
                @if !f.is_empty() {
                    span class="badge" { (f.active_count()) " active" }
                }
            }

            label {
                "Search"
                input type="search" name="q" value=(search.query) placeholder="Title, area or description";
            }

            label {
                "Location"
                select name="location" {
                    option value="" selected[location.is_empty()] { "All Locations" }
                    @for city in CITIES {
                        option value=(city) selected[location == *city] { (city) }
                    }
                    @for area in AREAS {
                        option value=(area) selected[location == *area] { (area) }
                    }
                }
            }

            fieldset class="row" {
                legend { "Price range (NPR)" }
                input type="number" name="min_price" min="0" placeholder="Min"
                    value=(f.min_price.map(|p| p.to_string()).unwrap_or_default());
                input type="number" name="max_price" min="0" placeholder="Max"
                    value=(f.max_price.map(|p| p.to_string()).unwrap_or_default());
            }

            fieldset {
                legend { "Room type" }
                @for room_type in RoomType::ALL {
                    label class="check" {
                        input type="checkbox" name="room_type" value=(room_type.as_str())
                            checked[f.room_types.contains(room_type)];
                        (room_type.as_str())
                    }
                }
            }

            fieldset {
                legend { "Amenities" }
                @for amenity in AMENITIES.iter().take(6) {
                    label class="check" {
                        input type="checkbox" name="amenity" value=(amenity)
                            checked[f.amenities.iter().any(|a| a == amenity)];
                        (amenity)
                    }
                }
            }

            fieldset {
                legend { "Features" }
                @for (key, label, on) in [
                    ("furnished", "Furnished", f.furnished),
                    ("parking", "Parking", f.parking),
                    ("wifi", "WiFi", f.wifi),
                    ("kitchen", "Kitchen", f.kitchen),
                ] {
                    label class="check" {
                        input type="checkbox" name=(key) checked[on];
                        (label)
                    }
                }
            }

            label {
                "Washroom"
                select name="washroom" {
                    option value="" selected[f.washroom.is_none()] { "Any type" }
                    @for w in WashroomType::ALL {
                        option value=(w.as_str()) selected[f.washroom == Some(*w)] { (washroom_label(*w)) }
                    }
                }
            }

            label {
                "Gender preference"
                select name="gender" {
                    option value="" selected[f.gender.is_none()] { "Any gender" }
                    @for g in Gender::ALL {
                        option value=(g.as_str()) selected[f.gender == Some(*g)] { (gender_label(*g)) }
                    }
                }
            }

            fieldset class="row" {
                label {
                    "Available from"
                    input type="date" name="available_from"
                        value=(f.available_from.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default());
                }
                label {
                    "Max minimum stay (months)"
                    input type="number" name="min_stay" min="1"
                        value=(f.min_stay.map(|m| m.to_string()).unwrap_or_default());
                }
            }

            label {
                "Sort by"
                select name="sort" {
                    @for (key, label) in SortKey::CHOICES {
                        option value=(key.as_str()) selected[search.sort == key] { (label) }
                    }
                }
            }

            div class="row" {
                button type="submit" class="btn" { "Apply filters" }
                a class="btn btn-ghost" href=(action) { "Clear" }
            }
        }
    }
}
