//! Repository for the `roles` table.

use pixisphere_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::Role;

/// Column list for `roles` queries.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Read-only access to the seeded roles.
pub struct RoleRepo;

impl RoleRepo {
    /// Find a role by name (case-sensitive).
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE name = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a role ID to its name.
    ///
    /// `users.role_id` is a foreign key, so a missing row surfaces as
    /// [`sqlx::Error::RowNotFound`] rather than a fallback name.
    pub async fn resolve_name(pool: &PgPool, role_id: DbId) -> Result<String, sqlx::Error> {
        let (name,): (String,) = sqlx::query_as("SELECT name FROM roles WHERE id = $1")
            .bind(role_id)
            .fetch_one(pool)
            .await?;
        Ok(name)
    }
}
