// src/db/users.rs
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::user::User;
use crate::errors::ServerError;

const COLUMNS: &str = "id, email, name, role, avatar, phone, location";

/// A user together with the salted digest their password is checked against.
#[derive(Debug, Clone)]
pub struct StoredLogin {
    pub user: User,
    pub salt: Vec<u8>,
    pub hash: Vec<u8>,
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        name: row.get(2)?,
        role: row.get(3)?,
        avatar: row.get(4)?,
        phone: row.get(5)?,
        location: row.get(6)?,
    })
}

/// Email should already be normalized by caller (trim/lowercase).
pub fn find_login(conn: &Connection, email: &str) -> Result<Option<StoredLogin>, ServerError> {
    conn.query_row(
        &format!("select {COLUMNS}, password_salt, password_hash from users where email = ?1"),
        params![email],
        |row| {
            Ok(StoredLogin {
                user: user_from_row(row)?,
                salt: row.get(7)?,
                hash: row.get(8)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select login failed: {e}")))
}

pub fn find_user(conn: &Connection, id: &str) -> Result<Option<User>, ServerError> {
    conn.query_row(
        &format!("select {COLUMNS} from users where id = ?1"),
        params![id],
        user_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select user failed: {e}")))
}

pub fn all_users(conn: &Connection) -> Result<Vec<User>, ServerError> {
    let mut stmt = conn
        .prepare(&format!("select {COLUMNS} from users order by rowid"))
        .map_err(|e| ServerError::DbError(format!("prepare users query failed: {e}")))?;

    let rows = stmt
        .query_map([], user_from_row)
        .map_err(|e| ServerError::DbError(format!("query users failed: {e}")))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerError::DbError(format!("read user row failed: {e}")))
}

pub fn insert_user(
    conn: &Connection,
    user: &User,
    salt: &[u8],
    hash: &[u8],
) -> Result<(), ServerError> {
    conn.execute(
        "insert into users (id, email, name, role, avatar, phone, location, password_salt, password_hash)
         values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            user.id,
            user.email,
            user.name,
            user.role,
            user.avatar,
            user.phone,
            user.location,
            salt,
            hash
        ],
    )
    .map_err(|e| match e.sqlite_error_code() {
        Some(rusqlite::ErrorCode::ConstraintViolation) => {
            ServerError::Conflict(format!("user {} already exists", user.email))
        }
        _ => ServerError::DbError(format!("insert user failed: {e}")),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use crate::domain::role::Role;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(include_str!("../../sql/schema.sql")).unwrap();
        conn
    }

    #[test]
    fn login_lookup_returns_user_and_digest() {
        let conn = conn();
        let user = fixtures::user("2", Role::Owner);
        insert_user(&conn, &user, b"salt", b"hash").unwrap();

        let login = find_login(&conn, "owner@example.com").unwrap().unwrap();
        assert_eq!(login.user, user);
        assert_eq!(login.salt, b"salt");
        assert_eq!(login.hash, b"hash");
        assert!(find_login(&conn, "nobody@example.com").unwrap().is_none());
    }

    #[test]
    fn duplicate_email_is_a_conflict() {
        let conn = conn();
        let user = fixtures::user("2", Role::Owner);
        insert_user(&conn, &user, b"s", b"h").unwrap();

        let again = User {
            id: "9".into(),
            ..user
        };
        assert_eq!(insert_user(&conn, &again, b"s", b"h").unwrap_err().status(), 409);
    }

    #[test]
    fn users_list_in_insertion_order() {
        let conn = conn();
        insert_user(&conn, &fixtures::user("3", Role::Admin), b"s", b"h").unwrap();
        insert_user(&conn, &fixtures::user("1", Role::Searcher), b"s", b"h").unwrap();

        let ids: Vec<String> = all_users(&conn).unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["3", "1"]);
        assert_eq!(find_user(&conn, "1").unwrap().map(|u| u.role), Some(Role::Searcher));
    }
}
