use crate::domain::feed::{FeedPage, FeedTab};
use crate::domain::role::Viewer;
use crate::domain::user::User;
use crate::templates::components::{notice, room_grid, tabs, Notice, Tab};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub user: Option<&'a User>,
    pub tab: FeedTab,
    pub feed: FeedPage,
    pub notice: Option<Notice>,
}

pub fn home_page(vm: &HomeVm<'_>) -> Markup {
    let viewer = Viewer::from_user(vm.user);
    let feed_tabs: Vec<Tab> = FeedTab::ALL
        .iter()
        .map(|t| Tab {
            href: format!("/?tab={}", t.as_str()),
            label: t.label(),
            count: None,
            active: *t == vm.tab,
        })
        .collect();

    desktop_layout(
        "Home",
        vm.user,
        html! {
            main class="container" {
                (notice(vm.notice))
                section class="hero" {
                    h1 { "Find your perfect room in Nepal" }
                    p class="lead" {
                        "Verified rooms across Kathmandu, Lalitpur, Pokhara and beyond."
                    }
                    div class="row" {
                        a class="btn" href="/rooms" { "Browse all rooms" }
                        @match vm.user {
                            Some(user) => {
                                a class="btn btn-ghost" href=(user.role.dashboard_path()) {
                                    "Go to your dashboard"
                                }
                            }
                            None => {
                                a class="btn btn-ghost" href="/login" { "Sign in" }
                            }
                        }
                    }
                }

                section {
                    (tabs(&feed_tabs))
                    @if vm.feed.rooms.is_empty() {
                        p class="empty" { "No rooms to show here yet." }
                    } @else {
                        (room_grid(&vm.feed.rooms, &viewer))
                    }
                    @if let Some(next) = vm.feed.next_count {
                        p class="center" {
                            a class="btn btn-ghost" href=(format!("/?tab={}&count={}", vm.tab.as_str(), next)) {
                                "Load more (" (vm.feed.total - vm.feed.rooms.len()) " remaining)"
                            }
                        }
                    }
                }
            }
        },
    )
}
