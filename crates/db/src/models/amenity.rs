//! Amenity catalog model.

use serde::Serialize;
use sqlx::FromRow;

/// An amenity tag and how many published rooms carry it.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityCount {
    pub name: String,
    pub room_count: i64,
}
