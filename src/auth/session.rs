// src/auth/session.rs
use std::collections::HashMap;
use std::sync::Mutex;

use astra::Request;

use crate::auth::token::{hash_token, new_session_token};
use crate::db::connection::Database;
use crate::db::users::find_user;
use crate::domain::user::User;
use crate::errors::ServerError;

pub const SESSION_COOKIE: &str = "session";

pub type TokenHash = [u8; 32];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub user_id: String,
    pub created_at: i64,
    pub expires_at: i64,
}

/// Where sessions live, keyed by the SHA-256 of the token.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &TokenHash) -> Result<Option<StoredSession>, ServerError>;
    fn set(&self, key: TokenHash, session: StoredSession) -> Result<(), ServerError>;
    fn clear(&self, key: &TokenHash) -> Result<(), ServerError>;
}

/// Process-local storage, used by tests.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    sessions: Mutex<HashMap<TokenHash, StoredSession>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<TokenHash, StoredSession>>, ServerError> {
        self.sessions.lock().map_err(|_| ServerError::InternalError)
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &TokenHash) -> Result<Option<StoredSession>, ServerError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: TokenHash, session: StoredSession) -> Result<(), ServerError> {
        self.lock()?.insert(key, session);
        Ok(())
    }

    fn clear(&self, key: &TokenHash) -> Result<(), ServerError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// A signed-in user for the duration of one request.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

pub struct SessionManager {
    storage: Box<dyn SessionStorage>,
    ttl_secs: i64,
}

impl SessionManager {
    pub fn new(storage: Box<dyn SessionStorage>, ttl_secs: i64) -> Self {
        Self { storage, ttl_secs }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    pub fn start(&self, user: User, now: i64) -> Result<Session, ServerError> {
        let token = new_session_token();
        self.storage.set(
            hash_token(&token),
            StoredSession {
                user_id: user.id.clone(),
                created_at: now,
                expires_at: now.saturating_add(self.ttl_secs),
            },
        )?;

        tracing::info!(user_id = %user.id, role = %user.role, "session started");
        Ok(Session { token, user })
    }

    /// `None` for unknown, expired or orphaned tokens. Expired ones are cleared.
    pub fn resume(
        &self,
        db: &Database,
        token: &str,
        now: i64,
    ) -> Result<Option<Session>, ServerError> {
        let key = hash_token(token);
        let Some(stored) = self.storage.get(&key)? else {
            return Ok(None);
        };

        if stored.expires_at <= now {
            tracing::debug!(user_id = %stored.user_id, "session expired");
            self.storage.clear(&key)?;
            return Ok(None);
        }

        let user = db.with_conn(|conn| find_user(conn, &stored.user_id))?;
        Ok(user.map(|user| Session {
            token: token.to_string(),
            user,
        }))
    }

    pub fn end(&self, token: &str) -> Result<(), ServerError> {
        self.storage.clear(&hash_token(token))
    }
}

pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age_secs}")
}

pub fn expired_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

/// The session token from the request's `Cookie` headers, if any.
pub fn token_from_request(req: &Request) -> Option<String> {
    req.headers()
        .get_all("cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}
