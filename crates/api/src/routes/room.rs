//! Route definitions for the `/rooms` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::room;
use crate::state::AppState;

/// Routes mounted at `/rooms`.
///
/// ```text
/// GET    /                  -> list (newest first)
/// POST   /                  -> create
/// GET    /search            -> search (top rated first)
/// GET    /number/{number}   -> get_by_room_number
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// PATCH  /{id}/publish      -> set_published
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(room::list).post(room::create))
        .route("/search", get(room::search))
        .route("/number/{number}", get(room::get_by_room_number))
        .route(
            "/{id}",
            get(room::get_by_id).put(room::update).delete(room::delete),
        )
        .route("/{id}/publish", patch(room::set_published))
}
