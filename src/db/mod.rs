//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `actor.rs`: the store actor owning the connection

pub mod actor;
pub mod models;
pub mod schema;

pub use actor::{PetStoreHandle, spawn};
pub use models::Pet;
pub use schema::SQLITE_INIT;
