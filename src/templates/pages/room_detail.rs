use crate::domain::listing::Listing;
use crate::domain::role::{ListingAction, Viewer};
use crate::templates::components::{format_price, moderation_forms, status_badge};
use crate::templates::desktop_layout;
use maud::{html, Markup};

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

pub fn room_detail_page(listing: &Listing, viewer: &Viewer<'_>) -> Markup {
    let actions = viewer.actions_for(listing);
    let a = &listing.availability;
    let f = &listing.features;
    let p = &listing.preferences;

    desktop_layout(
        &listing.title,
        viewer.user(),
        html! {
            main class="container room-detail" {
                p { a href="/rooms" { "← All rooms" } }
                div class="room-head" {
                    h1 { (listing.title) }
                    @if viewer.shows_status() {
                        (status_badge(listing.status))
                    }
                }
                p class="muted" { (listing.location.address) " · " (listing.location.area) ", " (listing.location.city) }

                div class="gallery" {
                    @for (i, src) in listing.images.iter().enumerate() {
                        img src=(src) alt=(format!("{} photo {}", listing.title, i + 1));
                    }
                }

                div class="detail-grid" {
                    section class="card" {
                        h2 { "About this room" }
                        p { (listing.description) }
                        h3 { "Amenities" }
                        ul class="chips" {
                            @for amenity in &listing.amenities {
                                li { (amenity) }
                            }
                        }
                        h3 { "Features" }
                        dl {
                            dt { "Room type" } dd { (listing.room_type.as_str()) }
                            dt { "Washroom" } dd { (f.washroom.as_str()) }
                            dt { "Furnished" } dd { (yes_no(f.furnished)) }
                            dt { "Parking" } dd { (yes_no(f.parking)) }
                            dt { "WiFi" } dd { (yes_no(f.wifi)) }
                            dt { "Kitchen" } dd { (yes_no(f.kitchen)) }
                        }
                        h3 { "Preferences" }
                        dl {
                            dt { "Gender" } dd { (p.gender.as_str()) }
                            dt { "Suits" } dd { (p.professions.join(", ")) }
                            dt { "Smoking" } dd { (if p.smoking_allowed { "Allowed" } else { "Not allowed" }) }
                            dt { "Pets" } dd { (if p.pets_allowed { "Allowed" } else { "Not allowed" }) }
                        }
                    }

                    aside class="card" {
                        p class="price" { (format_price(listing.price)) span class="muted" { " / month" } }
                        dl {
                            dt { "Available" } dd { (if a.available { "Now accepting tenants" } else { "Not available" }) }
                            dt { "From" } dd { (a.available_from.format("%d %b %Y").to_string()) }
                            dt { "Minimum stay" } dd { (a.min_stay) " months" }
                            dt { "Listed" } dd { (listing.created_at.format("%d %b %Y").to_string()) }
                        }
                        h3 { "Owner" }
                        p { (listing.owner_name) }
                        @if actions.contains(&ListingAction::ContactOwner) {
                            a class="btn" href=(format!("tel:{}", listing.owner_phone)) {
                                "Call " (listing.owner_phone)
                            }
                        }
                        (moderation_forms(listing, &actions))
                    }
                }
            }
        },
    )
}
