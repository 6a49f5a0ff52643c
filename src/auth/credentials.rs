// src/auth/credentials.rs
use rusqlite::Connection;

use crate::auth::token::{hash_password, hashes_equal};
use crate::db::users::find_login;
use crate::domain::user::User;
use crate::errors::ServerError;

pub const INVALID_LOGIN: &str = "Invalid email or password";

#[derive(Debug, Clone, Default)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Unknown email and wrong password fail the same way.
pub fn authenticate(conn: &Connection, creds: &LoginCredentials) -> Result<User, ServerError> {
    let email = normalize_email(&creds.email);
    if email.is_empty() || creds.password.is_empty() {
        return Err(ServerError::Unauthorized(INVALID_LOGIN.into()));
    }

    let Some(stored) = find_login(conn, &email)? else {
        tracing::info!(%email, "login for unknown email");
        return Err(ServerError::Unauthorized(INVALID_LOGIN.into()));
    };

    if !hashes_equal(&stored.hash, &hash_password(&stored.salt, &creds.password)) {
        tracing::info!(%email, "login with wrong password");
        return Err(ServerError::Unauthorized(INVALID_LOGIN.into()));
    }

    Ok(stored.user)
}
