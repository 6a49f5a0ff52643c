// src/config.rs
use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("{key} must be between {min} and {max}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: String,
        min: String,
        max: String,
    },
}

const WORKERS: RangeInclusive<usize> = 1..=1024;
const SESSION_TTL_SECS: RangeInclusive<i64> = 60..=60 * 60 * 24 * 365;
const LATEST_WINDOW_DAYS: RangeInclusive<i64> = 1..=3650;

/// Knobs for the home page feed. The thresholds are heuristics,
/// not product rules, so they live in config.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub trending_min_price: u32,
    pub latest_window_days: i64,
    pub page_size: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            trending_min_price: 15_000,
            latest_window_days: 7,
            page_size: 6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub db_path: String,
    pub max_workers: usize,
    /// Session lifetime in seconds.
    pub session_ttl_secs: i64,
    /// Load the sample rooms and users into an empty database.
    pub seed_sample_data: bool,
    pub feed: FeedConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "rooms.sqlite3".to_string(),
            max_workers: 8,
            session_ttl_secs: 60 * 60 * 24 * 7,
            seed_sample_data: true,
            feed: FeedConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads `.env` (if present) and then the `ROOMS_*` environment variables.
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            bind_addr: parse_or(&lookup, "ROOMS_ADDR", defaults.bind_addr)?,
            db_path: lookup("ROOMS_DB_PATH").unwrap_or(defaults.db_path),
            max_workers: bounded(
                parse_or(&lookup, "ROOMS_WORKERS", defaults.max_workers)?,
                "ROOMS_WORKERS",
                WORKERS,
            )?,
            session_ttl_secs: bounded(
                parse_or(&lookup, "ROOMS_SESSION_TTL_SECS", defaults.session_ttl_secs)?,
                "ROOMS_SESSION_TTL_SECS",
                SESSION_TTL_SECS,
            )?,
            seed_sample_data: parse_or(&lookup, "ROOMS_SEED", defaults.seed_sample_data)?,
            feed: FeedConfig {
                trending_min_price: parse_or(
                    &lookup,
                    "ROOMS_TRENDING_MIN_PRICE",
                    defaults.feed.trending_min_price,
                )?,
                latest_window_days: bounded(
                    parse_or(&lookup, "ROOMS_LATEST_WINDOW_DAYS", defaults.feed.latest_window_days)?,
                    "ROOMS_LATEST_WINDOW_DAYS",
                    LATEST_WINDOW_DAYS,
                )?,
                page_size: defaults.feed.page_size,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn bounded<T>(value: T, key: &'static str, range: RangeInclusive<T>) -> Result<T, ConfigError>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value: value.to_string(),
            min: range.start().to_string(),
            max: range.end().to_string(),
        })
    }
}
