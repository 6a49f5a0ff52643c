use crate::domain::listing::Listing;
use crate::domain::role::Viewer;
use crate::domain::stats::{ListingStats, StatusTab, UserStats};
use crate::domain::status::ModerationStatus;
use crate::domain::user::User;
use crate::templates::components::{
    format_price, moderation_forms, notice, stat_card, status_badge, tabs, Notice, Tab,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct AdminVm<'a> {
    pub user: &'a User,
    pub listing_stats: ListingStats,
    pub user_stats: UserStats,
    pub tab: StatusTab,
    pub listings: Vec<Listing>,
    pub notice: Option<Notice>,
}

pub fn admin_page(vm: &AdminVm<'_>) -> Markup {
    let viewer = Viewer::Signed(vm.user);
    let status_tabs: Vec<Tab> = [
        (StatusTab::Only(ModerationStatus::Pending), "Pending"),
        (StatusTab::Only(ModerationStatus::Approved), "Approved"),
        (StatusTab::Only(ModerationStatus::Rejected), "Rejected"),
        (StatusTab::All, "All"),
    ]
    .into_iter()
    .map(|(tab, label)| Tab {
        href: format!("/admin?tab={}", tab.as_str()),
        label,
        count: Some(vm.listing_stats.count(tab)),
        active: tab == vm.tab,
    })
    .collect();

    desktop_layout(
        "Admin Dashboard",
        Some(vm.user),
        html! {
            main class="container" {
                (notice(vm.notice))
                h1 { "Admin Dashboard" }
                p class="lead" { "Manage room listings and platform users." }

                @if vm.listing_stats.pending > 0 {
                    div class="notice notice-warning" role="status" {
                        (vm.listing_stats.pending) " listing(s) awaiting review. "
                        a href="/admin?tab=pending" { "Review pending" }
                    }
                }

                div class="stats" {
                    (stat_card("Total Listings", vm.listing_stats.total, "All room listings"))
                    (stat_card("Pending Review", vm.listing_stats.pending, "Awaiting approval"))
                    (stat_card("Active Listings", vm.listing_stats.approved, "Live on platform"))
                    (stat_card("Total Users", vm.user_stats.total, "Platform users"))
                }

                div class="card" {
                    h3 { "User Overview" }
                    dl class="inline-stats" {
                        dt { "Room Searchers" } dd { (vm.user_stats.searchers) }
                        dt { "Room Owners" } dd { (vm.user_stats.owners) }
                        dt { "Administrators" } dd { (vm.user_stats.admins) }
                    }
                }

                section class="card" {
                    h3 { "Room Listings Management" }
                    (tabs(&status_tabs))
                    @if vm.listings.is_empty() {
                        p class="empty" { "No listings in this tab." }
                    } @else {
                        table class="listing-table" {
                            thead {
                                tr {
                                    th { "Room" }
                                    th { "Owner" }
                                    th { "Price" }
                                    th { "Submitted" }
                                    th { "Status" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                @for listing in &vm.listings {
                                    tr {
                                        td {
                                            a href=(format!("/rooms/{}", listing.id)) { (listing.title) }
                                            br;
                                            span class="muted" { (listing.location.area) ", " (listing.location.city) }
                                        }
                                        td { (listing.owner_name) br; span class="muted" { (listing.owner_phone) } }
                                        td { (format_price(listing.price)) }
                                        td { (listing.created_at.format("%Y-%m-%d").to_string()) }
                                        td { (status_badge(listing.status)) }
                                        td { (moderation_forms(listing, &viewer.actions_for(listing))) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
