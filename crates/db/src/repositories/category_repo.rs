//! Repository for the `categories` table.

use pixisphere_core::naming::normalize_category_name;
use pixisphere_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list for `categories` queries.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides get-or-create and read operations for service categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Return the category with the given name, creating it if absent.
    ///
    /// The name is normalized (trimmed, lowercased) first. A single upsert
    /// against `uq_categories_name` makes concurrent callers converge on the
    /// same row; the existing description is never touched.
    pub async fn get_or_create(pool: &PgPool, name: &str) -> Result<Category, sqlx::Error> {
        let normalized = normalize_category_name(name);

        let query = format!(
            "INSERT INTO categories (name) VALUES ($1) \
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&normalized)
            .fetch_one(pool)
            .await
    }

    /// Insert a new category. Fails with a unique violation if the
    /// normalized name already exists.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, description) \
             VALUES ($1, COALESCE($2, '')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(normalize_category_name(&input.name))
            .bind(input.description.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Find a category by name. The lookup name is normalized the same way
    /// stored names are.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE name = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(normalize_category_name(name))
            .fetch_optional(pool)
            .await
    }

    /// List all categories alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Update a category. Absent fields keep their current values; a new
    /// name is normalized. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET                 name = COALESCE($2, name),                 description = COALESCE($3, description)              WHERE id = $1              RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(normalize_category_name))
            .bind(input.description.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a category, returning the removed row. Users and enquiries
    /// pointing at it have the reference cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("DELETE FROM categories WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
