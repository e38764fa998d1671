//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `pets` table (one row per created pet)
///
/// AUTOINCREMENT keeps ids strictly increasing across the table's lifetime,
/// matching the sequence semantics callers observe through `insert_pet`.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS pets (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name VARCHAR(255) NOT NULL
);
"#;
