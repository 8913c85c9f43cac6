//! Handlers for the `/enquiry` resource.
//!
//! Clients submit enquiries; the category and city are resolved (created on
//! first use) and every matching partner is assigned up front. Admins then
//! assign/unassign partners, set the status, or delete the enquiry. Reads by
//! id and by partner are public.

use axum::extract::State;
use axum::Json;
use pixisphere_core::enquiry::{parse_partner_ids, parse_service_date};
use pixisphere_core::enquiry_status::validate_status;
use pixisphere_core::error::CoreError;
use pixisphere_core::naming::require_non_blank;
use pixisphere_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use pixisphere_core::types::{DbId, Timestamp};
use pixisphere_db::models::enquiry::{CreateEnquiry, Enquiry};
use pixisphere_db::repositories::{CategoryRepo, EnquiryRepo, LocationRepo, UserRepo};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::rbac::{RequireAdmin, RequireClient};
use crate::query::PaginationParams;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /enquiry`.
///
/// Every field is optional at the serde level so that missing fields are
/// reported as validation errors rather than deserialization failures.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEnquiryRequest {
    #[validate(required, length(min = 1))]
    pub category: Option<String>,
    #[validate(required, length(min = 1))]
    pub date: Option<String>,
    #[validate(required, range(exclusive_min = 0.0))]
    pub budget: Option<f64>,
    #[validate(required, length(min = 1))]
    pub city: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
    pub reference_image: Option<String>,
}

/// Request body for `PUT /enquiry/assign/{id}` and `PUT /enquiry/unassign/{id}`.
#[derive(Debug, Deserialize)]
pub struct PartnersRequest {
    /// Expected to be a JSON array of partner ids.
    pub partners: Option<Value>,
}

/// Request body for `PATCH /enquiry/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

/// Validated client input for a new enquiry.
struct EnquiryInput {
    category: String,
    city: String,
    service_date: Timestamp,
    budget: f64,
    message: String,
    reference_image: Option<String>,
}

impl CreateEnquiryRequest {
    fn into_input(self) -> Result<EnquiryInput, CoreError> {
        self.validate()?;

        let (Some(category), Some(date), Some(budget), Some(city), Some(message)) =
            (self.category, self.date, self.budget, self.city, self.message)
        else {
            return Err(CoreError::Validation(
                "Please provide all required fields".into(),
            ));
        };

        for (field, value) in [("category", &category), ("city", &city), ("message", &message)] {
            require_non_blank(field, value).map_err(CoreError::Validation)?;
        }

        let service_date = parse_service_date(&date).map_err(CoreError::Validation)?;

        Ok(EnquiryInput {
            category,
            city,
            service_date,
            budget,
            message,
            reference_image: self.reference_image,
        })
    }
}

/// Extract the partner id list from an assign/unassign body.
fn partner_ids(input: PartnersRequest) -> Result<Vec<DbId>, CoreError> {
    let Some(Value::Array(values)) = input.partners else {
        return Err(CoreError::Validation("Partners are required".into()));
    };
    parse_partner_ids(&values).map_err(CoreError::Validation)
}

fn enquiry_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Enquiry",
        id,
    })
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// POST /api/enquiry
///
/// Create an enquiry for the calling client. Category and city are resolved
/// with get-or-create, then every partner in that city or offering that
/// category is assigned. Reference rows created here are kept even if the
/// enquiry insert fails.
pub async fn create_enquiry(
    client: RequireClient,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEnquiryRequest>,
) -> AppResult<Json<ApiResponse<Enquiry>>> {
    let input = input.into_input()?;

    let category = CategoryRepo::get_or_create(&state.pool, &input.category).await?;
    let city = LocationRepo::get_or_create(&state.pool, &input.city).await?;

    let assigned_partners =
        UserRepo::match_partners(&state.pool, Some(city.id), Some(category.id)).await?;

    let create_dto = CreateEnquiry {
        client_id: client.user.user_id,
        category_id: Some(category.id),
        city_id: Some(city.id),
        service_date: input.service_date,
        budget: input.budget,
        message: input.message,
        reference_image: input.reference_image,
        assigned_partners,
    };
    let enquiry = EnquiryRepo::create(&state.pool, &create_dto).await?;

    tracing::info!(
        enquiry_id = enquiry.id,
        client_id = client.user.user_id,
        category_id = category.id,
        city_id = city.id,
        partners = enquiry.assigned_partners.len(),
        "Enquiry created",
    );

    Ok(Json(ApiResponse::ok("Enquiry created successfully", enquiry)))
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/enquiry/{id}
///
/// Public lookup of a single enquiry.
pub async fn get_enquiry(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<Enquiry>>> {
    let enquiry = EnquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| enquiry_not_found(id))?;

    Ok(Json(ApiResponse::ok("Enquiry found successfully", enquiry)))
}

/// GET /api/enquiry
///
/// List all enquiries, newest first. Admin only.
pub async fn list_enquiries(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<Json<ApiResponse<Vec<Enquiry>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let enquiries = EnquiryRepo::list(&state.pool, limit, offset).await?;

    Ok(Json(ApiResponse::ok(
        "Enquiries found successfully",
        enquiries,
    )))
}

/// GET /api/enquiry/partner/{user_id}
///
/// Public list of enquiries assigned to a partner. An unknown or unassigned
/// partner gets an empty list.
pub async fn list_partner_enquiries(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<Vec<Enquiry>>>> {
    let enquiries = EnquiryRepo::list_for_partner(&state.pool, user_id).await?;

    Ok(Json(ApiResponse::ok(
        "Enquiries found successfully",
        enquiries,
    )))
}

// ---------------------------------------------------------------------------
// Assignment
// ---------------------------------------------------------------------------

/// PUT /api/enquiry/assign/{id}
///
/// Append partners to the enquiry. Ids already assigned are appended again.
pub async fn assign_partners(
    admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<PartnersRequest>,
) -> AppResult<Json<ApiResponse<Enquiry>>> {
    let partners = partner_ids(input)?;

    let enquiry = EnquiryRepo::append_partners(&state.pool, id, &partners)
        .await?
        .ok_or_else(|| enquiry_not_found(id))?;

    tracing::info!(
        enquiry_id = id,
        added = partners.len(),
        user_id = admin.user.user_id,
        "Partners assigned",
    );

    Ok(Json(ApiResponse::ok(
        "Partners assigned successfully",
        enquiry,
    )))
}

/// PUT /api/enquiry/unassign/{id}
///
/// Remove partners from the enquiry. Ids that are not assigned are ignored.
pub async fn unassign_partners(
    admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<PartnersRequest>,
) -> AppResult<Json<ApiResponse<Enquiry>>> {
    let partners = partner_ids(input)?;

    let enquiry = EnquiryRepo::remove_partners(&state.pool, id, &partners)
        .await?
        .ok_or_else(|| enquiry_not_found(id))?;

    tracing::info!(
        enquiry_id = id,
        remaining = enquiry.assigned_partners.len(),
        user_id = admin.user.user_id,
        "Partners unassigned",
    );

    Ok(Json(ApiResponse::ok(
        "Partners unassigned successfully",
        enquiry,
    )))
}

// ---------------------------------------------------------------------------
// Status and deletion
// ---------------------------------------------------------------------------

/// PATCH /api/enquiry/{id}
///
/// Set the status to any of `new`, `responded`, `booked`, `closed`,
/// regardless of the current status.
pub async fn update_status(
    admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateStatusRequest>,
) -> AppResult<Json<ApiResponse<Enquiry>>> {
    let status = input
        .status
        .ok_or_else(|| CoreError::Validation("Status is required".into()))?;
    validate_status(&status).map_err(CoreError::Validation)?;

    let enquiry = EnquiryRepo::set_status(&state.pool, id, &status)
        .await?
        .ok_or_else(|| enquiry_not_found(id))?;

    tracing::info!(
        enquiry_id = id,
        status = %status,
        user_id = admin.user.user_id,
        "Enquiry status updated",
    );

    Ok(Json(ApiResponse::ok("Status updated successfully", enquiry)))
}

/// DELETE /api/enquiry/{id}
///
/// Permanently delete an enquiry and return the deleted record.
pub async fn delete_enquiry(
    admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<Enquiry>>> {
    let enquiry = EnquiryRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| enquiry_not_found(id))?;

    tracing::info!(enquiry_id = id, user_id = admin.user.user_id, "Enquiry deleted");

    Ok(Json(ApiResponse::ok("Enquiry deleted successfully", enquiry)))
}
