//! City (location) model and DTOs.

use pixisphere_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub city: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a location explicitly (admin endpoint).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocation {
    pub city: String,
}
