//! Handlers for the `/category` resource.
//!
//! Categories are mostly created implicitly by enquiry submission; these
//! endpoints list them and let admins manage them directly.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pixisphere_core::error::CoreError;
use pixisphere_core::naming::require_non_blank;
use pixisphere_core::types::DbId;
use pixisphere_db::models::category::{Category, CreateCategory, UpdateCategory};
use pixisphere_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/category
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(ApiResponse::ok(
        "Categories fetched successfully",
        categories,
    )))
}

/// POST /api/category
///
/// Create a category. Names are stored lowercase; a duplicate name is a 409.
pub async fn create_category(
    admin: RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<ApiResponse<Category>>)> {
    require_non_blank("name", &input.name).map_err(CoreError::Validation)?;

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        category_id = category.id,
        name = %category.name,
        user_id = admin.user.user_id,
        "Category created",
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Category created successfully", category)),
    ))
}

fn category_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// PUT /api/category/{id}
///
/// Change the name and/or description. At least one must be given.
pub async fn update_category(
    admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCategory>,
) -> AppResult<Json<ApiResponse<Category>>> {
    if input.name.is_none() && input.description.is_none() {
        return Err(CoreError::Validation("Please provide all required fields".into()).into());
    }
    if let Some(name) = &input.name {
        require_non_blank("name", name).map_err(CoreError::Validation)?;
    }

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| category_not_found(id))?;

    tracing::info!(category_id = id, user_id = admin.user.user_id, "Category updated");

    Ok(Json(ApiResponse::ok("Category updated successfully", category)))
}

/// DELETE /api/category/{id}
///
/// Remove a category. Enquiries and partners that referenced it keep
/// existing with the reference cleared.
pub async fn delete_category(
    admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let category = CategoryRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| category_not_found(id))?;

    tracing::info!(category_id = id, user_id = admin.user.user_id, "Category deleted");

    Ok(Json(ApiResponse::ok("Category deleted successfully", category)))
}
