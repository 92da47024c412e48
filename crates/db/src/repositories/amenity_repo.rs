//! Repository for the amenity catalog derived from `rooms.amenities`.

use sqlx::PgPool;

use crate::models::amenity::AmenityCount;

/// Read-only aggregation over room amenity tags.
pub struct AmenityRepo;

impl AmenityRepo {
    /// Every amenity carried by at least one published room, most common first.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<AmenityCount>, sqlx::Error> {
        sqlx::query_as::<_, AmenityCount>(
            "SELECT tag AS name, COUNT(DISTINCT r.id)::BIGINT AS room_count \
             FROM rooms r, UNNEST(r.amenities) AS tag \
             WHERE r.published = TRUE \
             GROUP BY tag \
             ORDER BY room_count DESC, name ASC",
        )
        .fetch_all(pool)
        .await
    }
}
