use maud::{html, Markup};

pub struct Tab<'a> {
    pub href: String,
    pub label: &'a str,
    pub count: Option<usize>,
    pub active: bool,
}

pub fn tabs(items: &[Tab<'_>]) -> Markup {
    html! {
        nav class="tabs" {
            @for tab in items {
                a href=(tab.href) class=(if tab.active { "tab active" } else { "tab" }) {
                    (tab.label)
                    @if let Some(count) = tab.count {
                        " (" (count) ")"
                    }
                }
            }
        }
    }
}
