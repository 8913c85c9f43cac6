//! Enquiry aggregate model and DTOs.

use pixisphere_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `enquiries` table.
///
/// `assigned_partners` keeps insertion order and may hold repeated ids when
/// the same partner was assigned more than once.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enquiry {
    pub id: DbId,
    pub client_id: DbId,
    pub category_id: Option<DbId>,
    pub city_id: Option<DbId>,
    /// Requested service date.
    #[serde(rename = "date")]
    pub service_date: Timestamp,
    pub budget: f64,
    pub message: String,
    pub reference_image: String,
    pub assigned_partners: Vec<DbId>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new enquiry. References are already resolved and the
/// initial partner list already matched.
#[derive(Debug, Clone)]
pub struct CreateEnquiry {
    pub client_id: DbId,
    pub category_id: Option<DbId>,
    pub city_id: Option<DbId>,
    pub service_date: Timestamp,
    pub budget: f64,
    pub message: String,
    pub reference_image: Option<String>,
    pub assigned_partners: Vec<DbId>,
}
