// src/db/seed.rs
use rusqlite::Connection;
use serde::Deserialize;

use crate::auth::token::{hash_password, new_salt};
use crate::db::listings::{count_listings, insert_listing};
use crate::db::users::insert_user;
use crate::domain::listing::Listing;
use crate::domain::user::User;
use crate::errors::ServerError;

const ROOMS_JSON: &str = include_str!("../../data/rooms.json");
const USERS_JSON: &str = include_str!("../../data/users.json");

/// Mock account: profile plus the plaintext password it signs in with.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    #[serde(flatten)]
    pub user: User,
    pub password: String,
}

pub fn sample_listings() -> Result<Vec<Listing>, ServerError> {
    serde_json::from_str(ROOMS_JSON)
        .map_err(|e| ServerError::DbError(format!("parse sample rooms failed: {e}")))
}

pub fn sample_users() -> Result<Vec<SeedUser>, ServerError> {
    serde_json::from_str(USERS_JSON)
        .map_err(|e| ServerError::DbError(format!("parse sample users failed: {e}")))
}

/// Loads the sample users and rooms when the listings table is empty.
/// Returns whether anything was written.
pub fn seed_if_empty(conn: &mut Connection) -> Result<bool, ServerError> {
    if count_listings(conn)? > 0 {
        return Ok(false);
    }

    let users = sample_users()?;
    let listings = sample_listings()?;

    let tx = conn
        .transaction()
        .map_err(|e| ServerError::DbError(format!("begin tx failed: {e}")))?;

    for seed in &users {
        let salt = new_salt();
        insert_user(&tx, &seed.user, &salt, &hash_password(&salt, &seed.password))?;
    }
    for listing in &listings {
        insert_listing(&tx, listing)?;
    }

    tx.commit()
        .map_err(|e| ServerError::DbError(format!("commit seed failed: {e}")))?;

    tracing::info!(
        users = users.len(),
        listings = listings.len(),
        "seeded sample data"
    );
    Ok(true)
}
