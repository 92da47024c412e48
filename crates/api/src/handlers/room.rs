//! Handlers for the `/rooms` resource.
//!
//! `list` and `search` share one filter pipeline and differ only in sort
//! order. Single-room endpoints see drafts as well as published rooms.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use haven_core::error::CoreError;
use haven_core::room::{normalize_room_amenities, require_text};
use haven_core::room_query::RoomSort;
use haven_core::types::DbId;
use haven_db::models::room::{CreateRoom, PublishRoom, Room, UpdateRoom};
use haven_db::repositories::room_repo::UQ_ROOM_NUMBER;
use haven_db::repositories::RoomRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, ValidatedJson};
use crate::query::RoomSearchParams;
use crate::response::{DataResponse, RoomPage};
use crate::state::AppState;

fn room_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Room", id })
}

/// Report a taken room number as a domain conflict; other errors pass through.
fn map_room_number_conflict(err: sqlx::Error, room_number: i64) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.constraint() == Some(UQ_ROOM_NUMBER) => {
            AppError::Core(CoreError::Conflict(format!(
                "Room number {room_number} already exists"
            )))
        }
        _ => AppError::Database(err),
    }
}

/// Run a filtered, paged room query with the given sort order.
async fn run_search(
    state: &AppState,
    params: RoomSearchParams,
    sort: RoomSort,
) -> AppResult<Json<RoomPage>> {
    let query = params.into_query(sort);
    let (rooms, total) = RoomRepo::search(&state.pool, &query).await?;

    tracing::debug!(
        ?sort,
        page = query.pagination.page,
        limit = query.pagination.limit,
        returned = rooms.len(),
        total,
        "Room search executed"
    );

    Ok(Json(RoomPage::new(rooms, total, query.pagination)))
}

/// GET /api/v1/rooms
pub async fn list(
    State(state): State<AppState>,
    params: RoomSearchParams,
) -> AppResult<Json<RoomPage>> {
    run_search(&state, params, RoomSort::Newest).await
}

/// GET /api/v1/rooms/search
pub async fn search(
    State(state): State<AppState>,
    params: RoomSearchParams,
) -> AppResult<Json<RoomPage>> {
    run_search(&state, params, RoomSort::TopRated).await
}

/// POST /api/v1/rooms
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(mut input): ValidatedJson<CreateRoom>,
) -> AppResult<(StatusCode, Json<DataResponse<Room>>)> {
    input.title = require_text("title", &input.title)?;
    input.property_type = require_text("propertyType", &input.property_type)?;
    input.location = require_text("location", &input.location)?;
    input.amenities = normalize_room_amenities(&input.amenities)?;

    let room = RoomRepo::create(&state.pool, &input)
        .await
        .map_err(|e| map_room_number_conflict(e, input.room_number))?;
    tracing::info!(room_id = room.id, room_number = room.room_number, "Room created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(room))))
}

/// GET /api/v1/rooms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DataResponse<Room>>> {
    let id = parse_id(&raw_id, "room")?;
    let room = RoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| room_not_found(id))?;
    Ok(Json(DataResponse::new(room)))
}

/// GET /api/v1/rooms/number/{number}
pub async fn get_by_room_number(
    State(state): State<AppState>,
    Path(raw_number): Path<String>,
) -> AppResult<Json<DataResponse<Room>>> {
    let number = raw_number
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= 0)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid room number: '{raw_number}'")))?;

    let room = RoomRepo::find_by_room_number(&state.pool, number)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Room number",
                id: number,
            })
        })?;
    Ok(Json(DataResponse::new(room)))
}

/// PUT /api/v1/rooms/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidatedJson(mut input): ValidatedJson<UpdateRoom>,
) -> AppResult<Json<DataResponse<Room>>> {
    let id = parse_id(&raw_id, "room")?;

    if let Some(title) = &input.title {
        input.title = Some(require_text("title", title)?);
    }
    if let Some(property_type) = &input.property_type {
        input.property_type = Some(require_text("propertyType", property_type)?);
    }
    if let Some(location) = &input.location {
        input.location = Some(require_text("location", location)?);
    }
    if let Some(amenities) = &input.amenities {
        input.amenities = Some(normalize_room_amenities(amenities)?);
    }

    let room = RoomRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| room_not_found(id))?;
    tracing::info!(room_id = id, "Room updated");

    Ok(Json(DataResponse::new(room)))
}

/// PATCH /api/v1/rooms/{id}/publish
pub async fn set_published(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidatedJson(input): ValidatedJson<PublishRoom>,
) -> AppResult<Json<DataResponse<Room>>> {
    let id = parse_id(&raw_id, "room")?;
    let room = RoomRepo::set_published(&state.pool, id, input.published)
        .await?
        .ok_or_else(|| room_not_found(id))?;
    tracing::info!(room_id = id, published = room.published, "Room publish state changed");

    Ok(Json(DataResponse::new(room)))
}

/// DELETE /api/v1/rooms/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id, "room")?;
    if RoomRepo::delete(&state.pool, id).await? {
        tracing::info!(room_id = id, "Room deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(room_not_found(id))
    }
}
