// src/db/sessions.rs
use rusqlite::{params, OptionalExtension};

use crate::auth::session::{SessionStorage, StoredSession, TokenHash};
use crate::db::connection::Database;
use crate::errors::ServerError;

/// Sessions in the `sessions` table. Clearing deletes the row.
#[derive(Debug, Clone)]
pub struct SqliteSessionStorage {
    db: Database,
}

impl SqliteSessionStorage {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Deletes every session that expired at or before `now`. Returns how many went.
    pub fn purge_expired(&self, now: i64) -> Result<usize, ServerError> {
        self.db.with_conn(|conn| {
            conn.execute("delete from sessions where expires_at <= ?1", params![now])
                .map_err(|e| ServerError::DbError(format!("purge sessions failed: {e}")))
        })
    }
}

impl SessionStorage for SqliteSessionStorage {
    fn get(&self, key: &TokenHash) -> Result<Option<StoredSession>, ServerError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "select user_id, created_at, expires_at
                 from sessions
                 where token_hash = ?1",
                params![key.as_slice()],
                |row| {
                    Ok(StoredSession {
                        user_id: row.get(0)?,
                        created_at: row.get(1)?,
                        expires_at: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
        })
    }

    fn set(&self, key: TokenHash, session: StoredSession) -> Result<(), ServerError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "insert into sessions (token_hash, user_id, created_at, expires_at)
                 values (?1, ?2, ?3, ?4)
                 on conflict (token_hash) do update set
                    user_id = excluded.user_id,
                    created_at = excluded.created_at,
                    expires_at = excluded.expires_at",
                params![
                    key.as_slice(),
                    session.user_id,
                    session.created_at,
                    session.expires_at
                ],
            )
            .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;
            Ok(())
        })
    }

    fn clear(&self, key: &TokenHash) -> Result<(), ServerError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "delete from sessions where token_hash = ?1",
                params![key.as_slice()],
            )
            .map_err(|e| ServerError::DbError(format!("delete session failed: {e}")))?;
            Ok(())
        })
    }
}
