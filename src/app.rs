// src/app.rs
use chrono::{NaiveDateTime, Utc};

use crate::auth::session::{SessionManager, SessionStorage};
use crate::config::AppConfig;
use crate::db::seed::seed_if_empty;
use crate::db::sessions::SqliteSessionStorage;
use crate::db::{init_db, Database};
use crate::errors::ServerError;

/// Shared by every worker thread for the life of the server.
pub struct AppState {
    pub db: Database,
    pub sessions: SessionManager,
    pub config: AppConfig,
}

impl AppState {
    /// Sessions persisted in SQLite next to the listings.
    pub fn new(config: AppConfig) -> Result<Self, ServerError> {
        let db = Database::new(config.db_path.clone());
        let storage = SqliteSessionStorage::new(db.clone());
        let state = Self::with_storage(config, Box::new(storage.clone()))?;

        let purged = storage.purge_expired(now_unix())?;
        if purged > 0 {
            tracing::info!(purged, "expired sessions removed");
        }
        Ok(state)
    }

    pub fn with_storage(
        config: AppConfig,
        storage: Box<dyn SessionStorage>,
    ) -> Result<Self, ServerError> {
        let db = Database::new(config.db_path.clone());
        init_db(&db)?;

        if config.seed_sample_data {
            db.with_conn(seed_if_empty)?;
        }

        Ok(Self {
            sessions: SessionManager::new(storage, config.session_ttl_secs),
            db,
            config,
        })
    }
}

pub fn now_unix() -> i64 {
    Utc::now().timestamp()
}

pub fn now_naive() -> NaiveDateTime {
    Utc::now().naive_utc()
}
