//! Repository for the `users` table.
//!
//! The enquiry workflow only reads users: it looks up the caller and matches
//! partners by city or category.

use pixisphere_core::roles::ROLE_PARTNER;
use pixisphere_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, email, password_hash, role_id, city_id, category_id, \
                        is_verified, created_at, updated_at";

/// Provides user lookups and partner matching.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (full_name, email, password_hash, role_id, city_id, category_id, is_verified)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.role_id)
            .bind(input.city_id)
            .bind(input.category_id)
            .bind(input.is_verified)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Ids of every partner located in `city_id` OR offering `category_id`.
    ///
    /// A `None` reference matches nothing on that side. No ranking or
    /// availability filtering; results are ordered by id.
    pub async fn match_partners(
        pool: &PgPool,
        city_id: Option<DbId>,
        category_id: Option<DbId>,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT u.id FROM users u
             JOIN roles r ON r.id = u.role_id
             WHERE r.name = $1
               AND (u.city_id = $2 OR u.category_id = $3)
             ORDER BY u.id",
        )
        .bind(ROLE_PARTNER)
        .bind(city_id)
        .bind(category_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
