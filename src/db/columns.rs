// src/db/columns.rs
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Type, ValueRef};
use rusqlite::Row;

use crate::domain::listing::{Gender, RoomType, WashroomType};
use crate::domain::role::Role;
use crate::domain::status::ModerationStatus;
use crate::errors::ServerError;

/// Labelled enums are stored as their lowercase label.
macro_rules! text_column {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToSql for $ty {
                fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                    Ok(ToSqlOutput::from(self.as_str()))
                }
            }

            impl FromSql for $ty {
                fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                    value
                        .as_str()?
                        .parse()
                        .map_err(|e| FromSqlError::Other(Box::new(e)))
                }
            }
        )+
    };
}

text_column!(RoomType, WashroomType, Gender, ModerationStatus, Role);

/// String lists live in a JSON text column.
pub fn list_to_json(items: &[String]) -> Result<String, ServerError> {
    serde_json::to_string(items)
        .map_err(|e| ServerError::DbError(format!("encode list column failed: {e}")))
}

pub fn json_list(row: &Row<'_>, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
