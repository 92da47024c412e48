//! Handlers for the `/amenities` catalog.

use axum::extract::State;
use axum::Json;
use haven_db::models::amenity::AmenityCount;
use haven_db::repositories::AmenityRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/amenities
///
/// Distinct amenity tags over published rooms, most common first.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<AmenityCount>>>> {
    let amenities = AmenityRepo::list_published(&state.pool).await?;
    Ok(Json(DataResponse::new(amenities)))
}
