//! Room domain vocabulary: room types, amenity tag rules, and numeric limits.
//!
//! Shared by the repository layer (which stores `room_type` as TEXT) and the
//! API layer (which validates incoming bodies against these rules).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Room type constants
// ---------------------------------------------------------------------------

pub const ROOM_TYPE_ENTIRE_HOME: &str = "Entire home";
pub const ROOM_TYPE_PRIVATE_ROOM: &str = "Private Room";
pub const ROOM_TYPE_SHARED_ROOM: &str = "Shared Room";

/// All valid room types, in display order.
pub const VALID_ROOM_TYPES: &[&str] = &[
    ROOM_TYPE_ENTIRE_HOME,
    ROOM_TYPE_PRIVATE_ROOM,
    ROOM_TYPE_SHARED_ROOM,
];

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum number of amenity tags on a single room.
pub const MAX_AMENITIES_PER_ROOM: usize = 64;

/// Maximum length of a single amenity tag.
pub const MAX_AMENITY_LEN: usize = 64;

// ---------------------------------------------------------------------------
// RoomType
// ---------------------------------------------------------------------------

/// The kind of space a guest books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "Entire home")]
    EntireHome,
    #[serde(rename = "Private Room")]
    PrivateRoom,
    #[serde(rename = "Shared Room")]
    SharedRoom,
}

impl RoomType {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EntireHome => ROOM_TYPE_ENTIRE_HOME,
            Self::PrivateRoom => ROOM_TYPE_PRIVATE_ROOM,
            Self::SharedRoom => ROOM_TYPE_SHARED_ROOM,
        }
    }
}

impl FromStr for RoomType {
    type Err = CoreError;

    /// Parse the stored string form, returning an error for unknown types.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROOM_TYPE_ENTIRE_HOME => Ok(Self::EntireHome),
            ROOM_TYPE_PRIVATE_ROOM => Ok(Self::PrivateRoom),
            ROOM_TYPE_SHARED_ROOM => Ok(Self::SharedRoom),
            other => Err(CoreError::Validation(format!(
                "Unknown room type: '{other}'. Valid types: {}",
                VALID_ROOM_TYPES.join(", ")
            ))),
        }
    }
}

/// Row decoding goes through this (`#[sqlx(try_from = "String")]`).
impl TryFrom<String> for RoomType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Amenity tags
// ---------------------------------------------------------------------------

/// Trim amenity tags supplied on a room body and reject unusable ones.
///
/// Unlike search input, a room's own tag list is strict: an empty or
/// oversized tag is an error rather than something to drop silently.
pub fn normalize_room_amenities(tags: &[String]) -> Result<Vec<String>, CoreError> {
    if tags.len() > MAX_AMENITIES_PER_ROOM {
        return Err(CoreError::Validation(format!(
            "A room can have at most {MAX_AMENITIES_PER_ROOM} amenities"
        )));
    }

    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation(
                "Amenity tags must not be empty".to_string(),
            ));
        }
        if trimmed.len() > MAX_AMENITY_LEN {
            return Err(CoreError::Validation(format!(
                "Amenity tag exceeds maximum length of {MAX_AMENITY_LEN} characters"
            )));
        }
        if !normalized.iter().any(|t| t == trimmed) {
            normalized.push(trimmed.to_string());
        }
    }
    Ok(normalized)
}

/// Trim a required text field, rejecting values that are blank after trimming.
pub fn require_text(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_string())
}
