use maud::{html, Markup};

pub fn stat_card(label: &str, value: usize, hint: &str) -> Markup {
    html! {
        div class="card stat" {
            p class="stat-label" { (label) }
            p class="stat-value" { (value) }
            p class="stat-hint" { (hint) }
        }
    }
}
