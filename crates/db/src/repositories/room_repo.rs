//! Repository for the `rooms` table.
//!
//! Besides CRUD, this hosts the search executor: a [`RoomQuery`] built by
//! `haven_core::room_query` is bound into one parameterised WHERE clause that
//! drives both the page query and the total count.

use haven_core::room_query::{RoomFilter, RoomQuery};
use haven_core::types::DbId;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Postgres};

use crate::models::room::{CreateRoom, Room, UpdateRoom};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, room_number, title, property_type, room_type, location, address, \
    price, nights, rating, bedrooms, beds, bathrooms, guests, amenities, \
    published, created_at, updated_at";

/// Search predicates. Each optional constraint is a nullable bind parameter
/// so that an absent filter short-circuits to `TRUE`.
///
/// `$1`/`$2` price bounds, `$3`..`$5` room-count minimums, `$6` escaped city
/// `ILIKE` pattern, `$7` required amenity tags.
const SEARCH_PREDICATES: &str = "\
    published = TRUE \
    AND ($1::BIGINT IS NULL OR price >= $1) \
    AND ($2::BIGINT IS NULL OR price <= $2) \
    AND ($3::BIGINT IS NULL OR bedrooms >= $3) \
    AND ($4::BIGINT IS NULL OR beds >= $4) \
    AND ($5::BIGINT IS NULL OR bathrooms >= $5) \
    AND ($6::TEXT IS NULL OR address ->> 'city' ILIKE $6) \
    AND ($7::TEXT[] IS NULL OR amenities @> $7)";

/// Unique constraint guarding `room_number`.
pub const UQ_ROOM_NUMBER: &str = "uq_rooms_room_number";

/// Provides CRUD and search operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room, returning the created row.
    ///
    /// `amenities` must already be normalized by the caller.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (room_number, title, property_type, room_type, location, \
                address, price, nights, rating, bedrooms, beds, bathrooms, guests, \
                amenities, published)
             VALUES ($1, $2, $3, $4, $5, $6, $7, \
                COALESCE($8::INTEGER, 1), COALESCE($9::DOUBLE PRECISION, 0), \
                COALESCE($10::INTEGER, 0), COALESCE($11::INTEGER, 0), \
                COALESCE($12::INTEGER, 0), COALESCE($13::INTEGER, 1), $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(input.room_number)
            .bind(&input.title)
            .bind(&input.property_type)
            .bind(input.room_type.as_str())
            .bind(&input.location)
            .bind(input.address.clone().map(Json))
            .bind(input.price)
            .bind(input.nights)
            .bind(input.rating)
            .bind(input.bedrooms)
            .bind(input.beds)
            .bind(input.bathrooms)
            .bind(input.guests)
            .bind(&input.amenities)
            .bind(input.published)
            .fetch_one(pool)
            .await
    }

    /// Find a room by its internal ID, published or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a room by its public room number, published or not.
    pub async fn find_by_room_number(
        pool: &PgPool,
        room_number: i64,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE room_number = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(room_number)
            .fetch_optional(pool)
            .await
    }

    /// Update a room. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET
                title = COALESCE($2, title),
                property_type = COALESCE($3, property_type),
                room_type = COALESCE($4, room_type),
                location = COALESCE($5, location),
                address = COALESCE($6, address),
                price = COALESCE($7, price),
                nights = COALESCE($8, nights),
                rating = COALESCE($9, rating),
                bedrooms = COALESCE($10, bedrooms),
                beds = COALESCE($11, beds),
                bathrooms = COALESCE($12, bathrooms),
                guests = COALESCE($13, guests),
                amenities = COALESCE($14, amenities),
                published = COALESCE($15, published)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.property_type)
            .bind(input.room_type.map(|t| t.as_str()))
            .bind(&input.location)
            .bind(input.address.clone().map(Json))
            .bind(input.price)
            .bind(input.nights)
            .bind(input.rating)
            .bind(input.bedrooms)
            .bind(input.beds)
            .bind(input.bathrooms)
            .bind(input.guests)
            .bind(&input.amenities)
            .bind(input.published)
            .fetch_optional(pool)
            .await
    }

    /// Set the published flag. Returns `None` if the room does not exist.
    pub async fn set_published(
        pool: &PgPool,
        id: DbId,
        published: bool,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("UPDATE rooms SET published = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(published)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a room by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Execute a room search, returning one page of rooms and the total
    /// number of matches.
    ///
    /// The total comes from the same predicates as the page, so it does not
    /// depend on `page` or `limit`.
    pub async fn search(
        pool: &PgPool,
        query: &RoomQuery,
    ) -> Result<(Vec<Room>, i64), sqlx::Error> {
        let page_sql = format!(
            "SELECT {COLUMNS} FROM rooms WHERE {SEARCH_PREDICATES} \
             ORDER BY {} LIMIT $8 OFFSET $9",
            query.sort.order_by_clause()
        );
        let count_sql = format!("SELECT COUNT(*) FROM rooms WHERE {SEARCH_PREDICATES}");

        let rooms = bind_filter(sqlx::query_as::<_, Room>(&page_sql), &query.filter)
            .bind(query.pagination.limit)
            .bind(query.pagination.skip())
            .fetch_all(pool)
            .await?;

        let (total,) = bind_filter(sqlx::query_as::<_, (i64,)>(&count_sql), &query.filter)
            .fetch_one(pool)
            .await?;

        Ok((rooms, total))
    }
}

/// Bind the seven search predicate parameters in order.
fn bind_filter<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    filter: &RoomFilter,
) -> QueryAs<'q, Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, PgRow>,
{
    query
        .bind(filter.min_price)
        .bind(filter.max_price)
        .bind(filter.min_bedrooms)
        .bind(filter.min_beds)
        .bind(filter.min_bathrooms)
        .bind(filter.city_pattern())
        .bind(filter.amenity_constraint().map(<[String]>::to_vec))
}
