use maud::{html, Markup};

use crate::domain::listing::Listing;
use crate::domain::role::{ListingAction, Viewer};
use crate::domain::status::{ModerationAction, ModerationStatus};
use crate::templates::components::format_price;

pub fn status_badge(status: ModerationStatus) -> Markup {
    html! {
        span class=(format!("badge badge-{}", status.as_str())) { (status.as_str()) }
    }
}

/// Approve/reject buttons for one listing.
pub fn moderation_forms(listing: &Listing, actions: &[ListingAction]) -> Markup {
    html! {
        @for action in actions {
            @let moderation = match action {
                ListingAction::Approve => Some(ModerationAction::Approve),
                ListingAction::Reject => Some(ModerationAction::Reject),
                _ => None,
            };
            @if let Some(moderation) = moderation {
                form
                    class="inline"
                    method="post"
                    action=(format!("/admin/rooms/{}/{}", listing.id, moderation.as_str()))
                {
                    button type="submit" class=(format!("btn btn-{}", moderation.as_str())) {
                        @match moderation {
                            ModerationAction::Approve => "Approve",
                            ModerationAction::Reject => "Reject",
                        }
                    }
                }
            }
        }
    }
}

pub fn room_card(listing: &Listing, viewer: &Viewer<'_>) -> Markup {
    let actions = viewer.actions_for(listing);

    html! {
        article class="room-card" {
            @if let Some(src) = listing.cover_image() {
                img class="cover" src=(src) alt=(listing.title) loading="lazy";
            }
            div class="room-body" {
                div class="room-head" {
                    h3 { a href=(format!("/rooms/{}", listing.id)) { (listing.title) } }
                    @if viewer.shows_status() {
                        (status_badge(listing.status))
                    }
                }
                p class="muted" { (listing.location.area) ", " (listing.location.city) }
                p class="price" { (format_price(listing.price)) span class="muted" { " / month" } }
                ul class="chips" {
                    li { (listing.room_type.as_str()) }
                    @for amenity in listing.amenities.iter().take(3) {
                        li { (amenity) }
                    }
                    @if listing.amenities.len() > 3 {
                        li { "+" (listing.amenities.len() - 3) " more" }
                    }
                }
                div class="room-actions" {
                    @for action in &actions {
                        @match action {
                            ListingAction::ViewDetails => {
                                a class="btn btn-ghost" href=(format!("/rooms/{}", listing.id)) { "View details" }
                            }
                            ListingAction::ContactOwner => {
                                a class="btn" href=(format!("tel:{}", listing.owner_phone)) { "Contact owner" }
                            }
                            ListingAction::Approve | ListingAction::Reject => {}
                        }
                    }
                    (moderation_forms(listing, &actions))
                }
            }
        }
    }
}

pub fn room_grid(listings: &[Listing], viewer: &Viewer<'_>) -> Markup {
    html! {
        div class="room-grid" {
            @for listing in listings {
                (room_card(listing, viewer))
            }
        }
    }
}
