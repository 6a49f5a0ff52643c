// src/domain/feed.rs
use chrono::{Duration, NaiveDateTime};

use crate::config::FeedConfig;
use crate::domain::listing::Listing;

/// Home page tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedTab {
    #[default]
    All,
    /// Priced above `FeedConfig::trending_min_price`.
    Trending,
    /// Created within the last `FeedConfig::latest_window_days`.
    Latest,
}

impl FeedTab {
    pub const ALL: [FeedTab; 3] = [FeedTab::All, FeedTab::Trending, FeedTab::Latest];

    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("trending") => FeedTab::Trending,
            Some("latest") => FeedTab::Latest,
            _ => FeedTab::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeedTab::All => "all",
            FeedTab::Trending => "trending",
            FeedTab::Latest => "latest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedTab::All => "All Rooms",
            FeedTab::Trending => "Trending",
            FeedTab::Latest => "Latest",
        }
    }

    pub fn matches(self, listing: &Listing, cfg: &FeedConfig, now: NaiveDateTime) -> bool {
        match self {
            FeedTab::All => true,
            FeedTab::Trending => listing.price > cfg.trending_min_price,
            FeedTab::Latest => match latest_cutoff(cfg.latest_window_days, now) {
                Some(cutoff) => listing.created_at > cutoff,
                // A window reaching past the calendar covers everything.
                None => true,
            },
        }
    }
}

fn latest_cutoff(window_days: i64, now: NaiveDateTime) -> Option<NaiveDateTime> {
    Duration::try_days(window_days).and_then(|window| now.checked_sub_signed(window))
}

/// One window of the feed plus what the "load more" link needs.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedPage {
    pub rooms: Vec<Listing>,
    pub total: usize,
    pub next_count: Option<usize>,
}

/// Filters `listings` by `tab` and keeps the first `count` (at least one page).
pub fn feed_page(
    listings: &[Listing],
    tab: FeedTab,
    count: Option<usize>,
    cfg: &FeedConfig,
    now: NaiveDateTime,
) -> FeedPage {
    let matching: Vec<&Listing> = listings
        .iter()
        .filter(|l| tab.matches(l, cfg, now))
        .collect();
    let total = matching.len();
    let shown = count.unwrap_or(cfg.page_size).max(cfg.page_size).min(total);

    FeedPage {
        rooms: matching.into_iter().take(shown).cloned().collect(),
        total,
        next_count: (shown < total).then(|| (shown + cfg.page_size).min(total)),
    }
}
