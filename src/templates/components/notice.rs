use maud::{html, Markup};

/// One-shot messages carried as `?notice=` on a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    SignedOut,
    Submitted,
    Approved,
    Rejected,
}

impl Notice {
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw? {
            "signed-out" => Some(Notice::SignedOut),
            "submitted" => Some(Notice::Submitted),
            "approved" => Some(Notice::Approved),
            "rejected" => Some(Notice::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Notice::SignedOut => "signed-out",
            Notice::Submitted => "submitted",
            Notice::Approved => "approved",
            Notice::Rejected => "rejected",
        }
    }

    fn message(self) -> &'static str {
        match self {
            Notice::SignedOut => "You have been signed out.",
            Notice::Submitted => "Room submitted. It will go live once an admin approves it.",
            Notice::Approved => "Listing approved. It is now visible to searchers.",
            Notice::Rejected => "Listing rejected.",
        }
    }
}

pub fn notice(value: Option<Notice>) -> Markup {
    html! {
        @if let Some(n) = value {
            div class=(format!("notice notice-{}", n.as_str())) role="status" { (n.message()) }
        }
    }
}
