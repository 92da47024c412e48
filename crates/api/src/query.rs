//! Query-string extractors for room listings.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use haven_core::room_query::{RawRoomParams, RoomQuery, RoomSort};

use crate::error::AppError;

/// Room search parameters exactly as they appeared on the query string.
///
/// Decoding fails on a query string that cannot be parsed at all, and on
/// values containing NUL bytes, which the database cannot store or compare.
/// Value coercion (lenient numbers, amenity cleanup) happens in
/// [`RoomSearchParams::into_query`].
///
/// ```ignore
/// async fn list(params: RoomSearchParams) -> AppResult<Json<RoomPage>> {
///     let query = params.into_query(RoomSort::Newest);
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RoomSearchParams(pub RawRoomParams);

impl RoomSearchParams {
    /// Build the typed search query with the given sort order.
    pub fn into_query(self, sort: RoomSort) -> RoomQuery {
        RoomQuery::from_params(&self.0, sort)
    }
}

impl<S> FromRequestParts<S> for RoomSearchParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Decoding into pairs keeps repeated keys (`amenities=a&amenities=b`).
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        if let Some((key, _)) = pairs
            .iter()
            .find(|(key, value)| key.contains('\0') || value.contains('\0'))
        {
            return Err(AppError::BadRequest(format!(
                "Query parameter '{}' contains a NUL byte",
                key.replace('\0', "\\0")
            )));
        }

        Ok(Self(RawRoomParams::from_pairs(pairs)))
    }
}
