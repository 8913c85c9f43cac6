//! Repository for the `locations` table.

use pixisphere_core::naming::normalize_city_name;
use pixisphere_core::types::DbId;
use sqlx::PgPool;

use crate::models::location::{CreateLocation, Location};

/// Column list for `locations` queries.
const COLUMNS: &str = "id, city, created_at, updated_at";

/// Provides get-or-create and read operations for cities.
pub struct LocationRepo;

impl LocationRepo {
    /// Return the location for `city`, creating it if absent.
    ///
    /// Matching is exact and case-sensitive; only surrounding whitespace is
    /// trimmed, so "Pune" and "pune" are distinct rows.
    pub async fn get_or_create(pool: &PgPool, city: &str) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations (city) VALUES ($1) \
             ON CONFLICT (city) DO UPDATE SET city = EXCLUDED.city \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(normalize_city_name(city))
            .fetch_one(pool)
            .await
    }

    /// Insert a new location. Fails with a unique violation on duplicates.
    pub async fn create(pool: &PgPool, input: &CreateLocation) -> Result<Location, sqlx::Error> {
        let query = format!("INSERT INTO locations (city) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Location>(&query)
            .bind(normalize_city_name(&input.city))
            .fetch_one(pool)
            .await
    }

    /// Find a location by exact city name.
    pub async fn find_by_city(pool: &PgPool, city: &str) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE city = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(normalize_city_name(city))
            .fetch_optional(pool)
            .await
    }

    /// List all locations alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations ORDER BY city");
        sqlx::query_as::<_, Location>(&query).fetch_all(pool).await
    }

    /// Rename a location. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateLocation,
    ) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("UPDATE locations SET city = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .bind(normalize_city_name(&input.city))
            .fetch_optional(pool)
            .await
    }

    /// Delete a location, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("DELETE FROM locations WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
