use std::collections::BTreeMap;

use crate::domain::listing::{Gender, RoomType, WashroomType, AMENITIES, AREAS, CITIES, PROFESSIONS};
use crate::domain::new_listing::NewListingForm;
use crate::domain::user::User;
use crate::templates::desktop_layout;
use maud::{html, Markup};

fn field_error(errors: &BTreeMap<String, String>, field: &str) -> Markup {
    html! {
        @if let Some(message) = errors.get(field) {
            span class="field-error" { (message) }
        }
    }
}

fn number_value(n: u32) -> String {
    if n == 0 {
        String::new()
    } else {
        n.to_string()
    }
}

pub fn add_room_page(user: &User, form: &NewListingForm, errors: &BTreeMap<String, String>) -> Markup {
    desktop_layout(
        "Add a room",
        Some(user),
        html! {
            main class="container narrow" {
                p { a href="/owner" { "← Back to my properties" } }
                h1 { "Add New Room" }
                p class="lead" { "New listings are reviewed by an admin before they go live." }

                @if !errors.is_empty() {
                    div class="notice notice-error" role="alert" { "Please fix the highlighted fields." }
                }

                form class="card room-form" method="post" action="/owner/rooms" {
                    h2 { "Basics" }
                    label {
                        "Title"
                        input type="text" name="title" value=(form.title) required minlength="10";
                        (field_error(errors, "title"))
                    }
                    label {
                        "Description"
                        textarea name="description" rows="5" required minlength="50" { (form.description) }
                        (field_error(errors, "description"))
                    }
                    div class="row" {
                        label {
                            "Monthly rent (NPR)"
                            input type="number" name="price" min="1000" value=(number_value(form.price)) required;
                            (field_error(errors, "price"))
                        }
                        label {
                            "Room type"
                            select name="room_type" {
                                @for t in RoomType::ALL {
                                    option value=(t.as_str()) selected[form.room_type == *t] { (t.as_str()) }
                                }
                            }
                        }
                    }

                    h2 { "Location" }
                    div class="row" {
                        label {
                            "City"
                            select name="city" required {
                                option value="" { "Select city" }
                                @for city in CITIES {
                                    option value=(city) selected[form.city == *city] { (city) }
                                }
                            }
                            (field_error(errors, "city"))
                        }
                        label {
                            "Area"
                            input type="text" name="area" list="areas" value=(form.area) required;
                            datalist id="areas" {
                                @for area in AREAS {
                                    option value=(area) {}
                                }
                            }
                            (field_error(errors, "area"))
                        }
                    }
                    label {
                        "Full address"
                        input type="text" name="address" value=(form.address) required minlength="10";
                        (field_error(errors, "address"))
                    }

                    h2 { "Availability" }
                    div class="row" {
                        label {
                            "Available from"
                            input type="date" name="available_from"
                                value=(form.available_from.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default())
                                required;
                            (field_error(errors, "available_from"))
                        }
                        label {
                            "Minimum stay (months)"
                            input type="number" name="min_stay" min="1" value=(number_value(form.min_stay)) required;
                            (field_error(errors, "min_stay"))
                        }
                    }

                    h2 { "Features" }
                    div class="row" {
                        @for (key, label, on) in [
                            ("furnished", "Furnished", form.furnished),
                            ("parking", "Parking", form.parking),
                            ("wifi", "WiFi", form.wifi),
                            ("kitchen", "Kitchen", form.kitchen),
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
                            @for w in WashroomType::ALL {
                                option value=(w.as_str()) selected[form.washroom == *w] { (w.as_str()) }
                            }
                        }
                    }
                    fieldset {
                        legend { "Amenities" }
                        @for amenity in AMENITIES {
                            label class="check" {
                                input type="checkbox" name="amenity" value=(amenity)
                                    checked[form.amenities.iter().any(|a| a == amenity)];
                                (amenity)
                            }
                        }
                    }

                    h2 { "Tenant preferences" }
                    label {
                        "Gender"
                        select name="gender" {
                            @for g in Gender::ALL {
                                option value=(g.as_str()) selected[form.gender == *g] { (g.as_str()) }
                            }
                        }
                    }
                    fieldset {
                        legend { "Suitable for" }
                        @for profession in PROFESSIONS {
                            label class="check" {
                                input type="checkbox" name="profession" value=(profession)
                                    checked[form.professions.iter().any(|p| p == profession)];
                                (profession)
                            }
                        }
                    }
                    div class="row" {
                        label class="check" {
                            input type="checkbox" name="smoking_allowed" checked[form.smoking_allowed];
                            "Smoking allowed"
                        }
                        label class="check" {
                            input type="checkbox" name="pets_allowed" checked[form.pets_allowed];
                            "Pets allowed"
                        }
                    }

                    h2 { "Contact and photos" }
                    label {
                        "Contact phone"
                        input type="tel" name="owner_phone"
                            value=(if form.owner_phone.is_empty() { user.phone.clone().unwrap_or_default() } else { form.owner_phone.clone() })
                            required minlength="10";
                        (field_error(errors, "owner_phone"))
                    }
                    label {
                        "Image URLs (one per line)"
                        textarea name="images" rows="3" required { (form.images.join("\n")) }
                        (field_error(errors, "images"))
                    }

                    button type="submit" class="btn" { "Submit for review" }
                }
            }
        },
    )
}
