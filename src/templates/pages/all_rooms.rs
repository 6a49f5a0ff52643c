use crate::templates::desktop_layout;
use crate::templates::pages::searcher::{search_results, SearchVm};
use maud::{html, Markup};

pub fn all_rooms_page(vm: &SearchVm<'_>) -> Markup {
    desktop_layout(
        "All rooms",
        vm.user,
        html! {
            main class="container" {
                h1 { "All Rooms" }
                p class="lead" { "Every approved listing on the platform." }
                (search_results("/rooms", vm))
            }
        },
    )
}
