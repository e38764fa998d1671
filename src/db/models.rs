use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted pet row. Created once via insert; never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Pet {
    pub id: i64,
    pub name: String,
}
