// src/db/listings.rs
use chrono::NaiveDateTime;
use rusqlite::{named_params, params, Connection, OptionalExtension, Row};

use crate::db::columns::{json_list, list_to_json};
use crate::domain::listing::{
    Availability, Coordinates, Features, Listing, Location, Preferences,
};
use crate::domain::status::ModerationStatus;
use crate::errors::ServerError;

const COLUMNS: &str = "id, title, description, price, area, city, address, lat, lng, \
    room_type, amenities, images, owner_id, owner_name, owner_phone, status, \
    created_at, updated_at, available, available_from, min_stay, \
    furnished, parking, wifi, kitchen, washroom, \
    gender, professions, smoking_allowed, pets_allowed";

fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<Listing> {
    let lat: Option<f64> = row.get(7)?;
    let lng: Option<f64> = row.get(8)?;

    Ok(Listing {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        location: Location {
            area: row.get(4)?,
            city: row.get(5)?,
            address: row.get(6)?,
            coordinates: lat.zip(lng).map(|(lat, lng)| Coordinates { lat, lng }),
        },
        room_type: row.get(9)?,
        amenities: json_list(row, 10)?,
        images: json_list(row, 11)?,
        owner_id: row.get(12)?,
        owner_name: row.get(13)?,
        owner_phone: row.get(14)?,
        status: row.get(15)?,
        created_at: row.get(16)?,
        updated_at: row.get(17)?,
        availability: Availability {
            available: row.get(18)?,
            available_from: row.get(19)?,
            min_stay: row.get(20)?,
        },
        features: Features {
            furnished: row.get(21)?,
            parking: row.get(22)?,
            wifi: row.get(23)?,
            kitchen: row.get(24)?,
            washroom: row.get(25)?,
        },
        preferences: Preferences {
            gender: row.get(26)?,
            professions: json_list(row, 27)?,
            smoking_allowed: row.get(28)?,
            pets_allowed: row.get(29)?,
        },
    })
}

fn query_listings(
    conn: &Connection,
    filter: &str,
    args: impl rusqlite::Params,
) -> Result<Vec<Listing>, ServerError> {
    let sql = format!("select {COLUMNS} from listings {filter} order by rowid");
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| ServerError::DbError(format!("prepare listings query failed: {e}")))?;

    let rows = stmt
        .query_map(args, listing_from_row)
        .map_err(|e| ServerError::DbError(format!("query listings failed: {e}")))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerError::DbError(format!("read listing row failed: {e}")))
}

/// Every listing in insertion order.
pub fn all_listings(conn: &Connection) -> Result<Vec<Listing>, ServerError> {
    query_listings(conn, "", [])
}

pub fn listings_by_owner(conn: &Connection, owner_id: &str) -> Result<Vec<Listing>, ServerError> {
    query_listings(conn, "where owner_id = ?1", params![owner_id])
}

pub fn find_listing(conn: &Connection, id: &str) -> Result<Option<Listing>, ServerError> {
    let sql = format!("select {COLUMNS} from listings where id = ?1");
    conn.query_row(&sql, params![id], listing_from_row)
        .optional()
        .map_err(|e| ServerError::DbError(format!("select listing failed: {e}")))
}

pub fn count_listings(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(*) from listings", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count listings failed: {e}")))
}

pub fn insert_listing(conn: &Connection, listing: &Listing) -> Result<(), ServerError> {
    let coords = listing.location.coordinates;

    conn.execute(
        &format!(
            "insert into listings ({COLUMNS}) values (
                :id, :title, :description, :price, :area, :city, :address, :lat, :lng,
                :room_type, :amenities, :images, :owner_id, :owner_name, :owner_phone, :status,
                :created_at, :updated_at, :available, :available_from, :min_stay,
                :furnished, :parking, :wifi, :kitchen, :washroom,
                :gender, :professions, :smoking_allowed, :pets_allowed
            )"
        ),
        named_params! {
            ":id": listing.id,
            ":title": listing.title,
            ":description": listing.description,
            ":price": listing.price,
            ":area": listing.location.area,
            ":city": listing.location.city,
            ":address": listing.location.address,
            ":lat": coords.map(|c| c.lat),
            ":lng": coords.map(|c| c.lng),
            ":room_type": listing.room_type,
            ":amenities": list_to_json(&listing.amenities)?,
            ":images": list_to_json(&listing.images)?,
            ":owner_id": listing.owner_id,
            ":owner_name": listing.owner_name,
            ":owner_phone": listing.owner_phone,
            ":status": listing.status,
            ":created_at": listing.created_at,
            ":updated_at": listing.updated_at,
            ":available": listing.availability.available,
            ":available_from": listing.availability.available_from,
            ":min_stay": listing.availability.min_stay,
            ":furnished": listing.features.furnished,
            ":parking": listing.features.parking,
            ":wifi": listing.features.wifi,
            ":kitchen": listing.features.kitchen,
            ":washroom": listing.features.washroom,
            ":gender": listing.preferences.gender,
            ":professions": list_to_json(&listing.preferences.professions)?,
            ":smoking_allowed": listing.preferences.smoking_allowed,
            ":pets_allowed": listing.preferences.pets_allowed,
        },
    )
    .map_err(|e| ServerError::DbError(format!("insert listing failed: {e}")))?;

    Ok(())
}

/// Writes a moderation result. The `from` guard makes a concurrent
/// decision on the same listing lose with `Conflict` instead of overwriting.
pub fn save_status(
    conn: &Connection,
    id: &str,
    from: ModerationStatus,
    to: ModerationStatus,
    updated_at: NaiveDateTime,
) -> Result<(), ServerError> {
    let changed = conn
        .execute(
            "update listings set status = ?1, updated_at = ?2 where id = ?3 and status = ?4",
            params![to, updated_at, id, from],
        )
        .map_err(|e| ServerError::DbError(format!("update listing status failed: {e}")))?;

    match changed {
        1 => Ok(()),
        _ => Err(ServerError::Conflict(format!(
            "listing {id} was not {from} any more"
        ))),
    }
}
