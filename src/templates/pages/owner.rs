use crate::domain::listing::Listing;
use crate::domain::role::Viewer;
use crate::domain::stats::{ListingStats, StatusTab};
use crate::domain::status::ModerationStatus;
use crate::domain::user::User;
use crate::templates::components::{notice, room_grid, stat_card, tabs, Notice, Tab};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct OwnerVm<'a> {
    pub user: &'a User,
    pub stats: ListingStats,
    pub tab: StatusTab,
    pub listings: Vec<Listing>,
    pub notice: Option<Notice>,
}

pub fn owner_page(vm: &OwnerVm<'_>) -> Markup {
    let viewer = Viewer::Signed(vm.user);
    let status_tabs: Vec<Tab> = [
        (StatusTab::All, "All"),
        (StatusTab::Only(ModerationStatus::Approved), "Approved"),
        (StatusTab::Only(ModerationStatus::Pending), "Pending"),
        (StatusTab::Only(ModerationStatus::Rejected), "Rejected"),
    ]
    .into_iter()
    .map(|(tab, label)| Tab {
        href: format!("/owner?tab={}", tab.as_str()),
        label,
        count: Some(vm.stats.count(tab)),
        active: tab == vm.tab,
    })
    .collect();

    desktop_layout(
        "My properties",
        Some(vm.user),
        html! {
            main class="container" {
                (notice(vm.notice))
                div class="page-head" {
                    div {
                        h1 { "My Properties" }
                        p class="lead" { "Manage your room listings and track their status." }
                    }
                    a class="btn" href="/owner/rooms/new" { "Add New Room" }
                }

                div class="stats" {
                    (stat_card("Total Listings", vm.stats.total, "All your properties"))
                    (stat_card("Approved", vm.stats.approved, "Live on platform"))
                    (stat_card("Pending", vm.stats.pending, "Under review"))
                    (stat_card("Rejected", vm.stats.rejected, "Need revision"))
                }

                section {
                    h2 { "Your Listings" }
                    (tabs(&status_tabs))
                    @if vm.listings.is_empty() {
                        div class="empty card" {
                            p { "Nothing here yet." }
                            a class="btn" href="/owner/rooms/new" { "List a new property" }
                        }
                    } @else {
                        (room_grid(&vm.listings, &viewer))
                    }
                }
            }
        },
    )
}
