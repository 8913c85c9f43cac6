//! Handlers for the `/location` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pixisphere_core::error::CoreError;
use pixisphere_core::naming::require_non_blank;
use pixisphere_core::types::DbId;
use pixisphere_db::models::location::{CreateLocation, Location};
use pixisphere_db::repositories::LocationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/location
pub async fn list_locations(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Location>>>> {
    let locations = LocationRepo::list(&state.pool).await?;

    Ok(Json(ApiResponse::ok(
        "Locations fetched successfully",
        locations,
    )))
}

/// POST /api/location
///
/// Create a city. Matching is case-sensitive, so "Pune" and "pune" are
/// distinct; an exact duplicate is a 409.
pub async fn create_location(
    admin: RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateLocation>,
) -> AppResult<(StatusCode, Json<ApiResponse<Location>>)> {
    require_non_blank("city", &input.city).map_err(CoreError::Validation)?;

    let location = LocationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        location_id = location.id,
        city = %location.city,
        user_id = admin.user.user_id,
        "Location created",
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Location created successfully", location)),
    ))
}

fn location_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Location",
        id,
    })
}

/// PUT /api/location/{id}
pub async fn update_location(
    admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<CreateLocation>,
) -> AppResult<Json<ApiResponse<Location>>> {
    require_non_blank("city", &input.city).map_err(CoreError::Validation)?;

    let location = LocationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| location_not_found(id))?;

    tracing::info!(
        location_id = id,
        city = %location.city,
        user_id = admin.user.user_id,
        "Location updated",
    );

    Ok(Json(ApiResponse::ok("Location updated successfully", location)))
}

/// DELETE /api/location/{id}
pub async fn delete_location(
    admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<Location>>> {
    let location = LocationRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| location_not_found(id))?;

    tracing::info!(location_id = id, user_id = admin.user.user_id, "Location deleted");

    Ok(Json(ApiResponse::ok("Location deleted successfully", location)))
}
