//! User entity model and DTOs.

use pixisphere_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
    pub city_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub is_verified: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    /// Resolved role name (e.g. `"client"`, `"partner"`).
    pub role: String,
    pub city_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub is_verified: bool,
    pub created_at: Timestamp,
}

impl UserResponse {
    /// Build the public projection of `user` with an already-resolved role name.
    pub fn from_user(user: &User, role: String) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            role,
            city_id: user.city_id,
            category_id: user.category_id,
            is_verified: user.is_verified,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role_id: DbId,
    pub city_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub is_verified: bool,
}
