use crate::domain::listing::Listing;
use crate::domain::role::Viewer;
use crate::domain::user::User;
use crate::params::SearchRequest;
use crate::templates::components::{room_grid, search_filters};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Shared by the searcher dashboard and the public room list.
pub struct SearchVm<'a> {
    pub user: Option<&'a User>,
    pub search: SearchRequest,
    pub results: Vec<Listing>,
    /// Size of the collection before filtering.
    pub total: usize,
}

pub fn search_results(action: &str, vm: &SearchVm<'_>) -> Markup {
    let viewer = Viewer::from_user(vm.user);

    html! {
        div class="search-layout" {
            aside { (search_filters(action, &vm.search)) }
            section {
                p class="result-count" {
                    "Showing " strong { (vm.results.len()) } " of " (vm.total) " rooms"
                    @if !vm.search.query.is_empty() {
                        " for “" (vm.search.query) "”"
                    }
                }
                @if vm.results.is_empty() {
                    div class="empty card" {
                        h3 { "No rooms found" }
                        p { "Try widening your price range or removing a filter." }
                        a class="btn btn-ghost" href=(action) { "Clear all filters" }
                    }
                } @else {
                    (room_grid(&vm.results, &viewer))
                }
            }
        }
    }
}

pub fn searcher_page(vm: &SearchVm<'_>) -> Markup {
    let greeting = vm.user.map(User::first_name).unwrap_or("there");

    desktop_layout(
        "Find a room",
        vm.user,
        html! {
            main class="container" {
                h1 { "Find Your Perfect Room" }
                p class="lead" { "Hi " (greeting) ", discover the best rooms available across Nepal." }
                (search_results("/searcher", vm))
            }
        },
    )
}
