pub mod columns;
pub mod connection;
pub mod listings;
pub mod seed;
pub mod sessions;
pub mod users;

pub use connection::{init_db, Database};
