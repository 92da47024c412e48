//! Shared response envelope types for API handlers.
//!
//! Single resources use `{ "success": true, "data": ... }`; room listings use
//! the page envelope [`RoomPage`].

use haven_core::room_query::{PageMeta, Pagination};
use haven_db::models::room::Room;
use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::new(room)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Paginated room envelope:
/// `{ success, count, total, page, limit, totalPages, rooms }`.
#[derive(Debug, Serialize)]
pub struct RoomPage {
    pub success: bool,
    #[serde(flatten)]
    pub meta: PageMeta,
    pub rooms: Vec<Room>,
}

impl RoomPage {
    /// Shape one page of results. `count` is taken from `rooms`.
    pub fn new(rooms: Vec<Room>, total: i64, pagination: Pagination) -> Self {
        Self {
            success: true,
            meta: PageMeta::new(total, pagination, rooms.len()),
            rooms,
        }
    }
}
