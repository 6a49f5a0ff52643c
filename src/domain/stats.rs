// src/domain/stats.rs
use crate::domain::listing::Listing;
use crate::domain::role::Role;
use crate::domain::status::ModerationStatus;
use crate::domain::user::User;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingStats {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
}

impl ListingStats {
    pub fn from_listings(listings: &[Listing]) -> Self {
        listings.iter().fold(Self::default(), |mut acc, l| {
            acc.total += 1;
            match l.status {
                ModerationStatus::Approved => acc.approved += 1,
                ModerationStatus::Pending => acc.pending += 1,
                ModerationStatus::Rejected => acc.rejected += 1,
            }
            acc
        })
    }

    pub fn count(&self, tab: StatusTab) -> usize {
        match tab {
            StatusTab::All => self.total,
            StatusTab::Only(ModerationStatus::Approved) => self.approved,
            StatusTab::Only(ModerationStatus::Pending) => self.pending,
            StatusTab::Only(ModerationStatus::Rejected) => self.rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub searchers: usize,
    pub owners: usize,
    pub admins: usize,
}

impl UserStats {
    pub fn from_users(users: &[User]) -> Self {
        users.iter().fold(Self::default(), |mut acc, u| {
            acc.total += 1;
            match u.role {
                Role::Searcher => acc.searchers += 1,
                Role::Owner => acc.owners += 1,
                Role::Admin => acc.admins += 1,
            }
            acc
        })
    }
}

/// Dashboard tab selecting listings by moderation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTab {
    All,
    Only(ModerationStatus),
}

impl StatusTab {
    /// Unknown or missing values fall back to `default`.
    pub fn parse(raw: Option<&str>, default: StatusTab) -> Self {
        match raw {
            Some("all") => StatusTab::All,
            Some(other) => other.parse().map(StatusTab::Only).unwrap_or(default),
            None => default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusTab::All => "all",
            StatusTab::Only(status) => status.as_str(),
        }
    }

    pub fn matches(self, listing: &Listing) -> bool {
        match self {
            StatusTab::All => true,
            StatusTab::Only(status) => listing.status == status,
        }
    }

    pub fn select(self, listings: &[Listing]) -> Vec<Listing> {
        listings.iter().filter(|l| self.matches(l)).cloned().collect()
    }
}
