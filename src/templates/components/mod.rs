pub mod card;
pub mod error;
pub mod filters;
pub mod notice;
pub mod room_card;
pub mod tabs;

pub use card::stat_card;
pub use error::error_page;
pub use filters::search_filters;
pub use notice::{notice, Notice};
pub use room_card::{moderation_forms, room_grid, status_badge};
pub use tabs::{tabs, Tab};

/// `15000` -> `"NPR 15,000"`.
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("NPR {out}")
}
