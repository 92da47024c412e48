pub mod amenity;
pub mod health;
pub mod room;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /rooms                     list, create
/// /rooms/search              top-rated search
/// /rooms/number/{number}     lookup by room number
/// /rooms/{id}                get, update, delete
/// /rooms/{id}/publish        publish toggle
///
/// /amenities                 amenity catalog
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/rooms", room::router())
        .nest("/amenities", amenity::router())
}
