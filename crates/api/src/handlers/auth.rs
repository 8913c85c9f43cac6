//! Handlers for the `/auth` resource.
//!
//! Registration lets clients and partners create their own accounts; a
//! partner's city and category are what enquiry matching keys on.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pixisphere_core::error::CoreError;
use pixisphere_core::naming::require_non_blank;
use pixisphere_core::roles::{validate_registration_role, ROLE_CLIENT};
use pixisphere_db::models::user::{CreateUser, UserResponse};
use pixisphere_db::repositories::{CategoryRepo, LocationRepo, RoleRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required, length(min = 1))]
    pub full_name: Option<String>,
    #[validate(required, email)]
    pub email: Option<String>,
    #[validate(required, length(min = 8))]
    pub password: Option<String>,
    /// City name; created on first use like enquiry cities.
    #[validate(required, length(min = 1))]
    pub city: Option<String>,
    /// Category name a partner offers. Ignored for clients.
    pub category: Option<String>,
    /// `client` (default) or `partner`.
    pub role: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// POST /api/auth/register
///
/// Create a verified account. City (and, for partners, category) names are
/// resolved with get-or-create. A taken email is a 409.
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    input.validate().map_err(CoreError::from)?;

    let RegisterRequest {
        full_name,
        email,
        password,
        city,
        category,
        role,
    } = input;
    let (Some(full_name), Some(email), Some(password), Some(city)) =
        (full_name, email, password, city)
    else {
        return Err(CoreError::Validation("Please provide all required fields".into()).into());
    };
    require_non_blank("full_name", &full_name).map_err(CoreError::Validation)?;
    require_non_blank("city", &city).map_err(CoreError::Validation)?;

    let role_name = role.unwrap_or_else(|| ROLE_CLIENT.to_string());
    validate_registration_role(&role_name).map_err(CoreError::Validation)?;

    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(CoreError::Conflict("User already exists".into()).into());
    }

    let role = RoleRepo::find_by_name(&state.pool, &role_name)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("Role '{role_name}' is not seeded")))?;

    let city = LocationRepo::get_or_create(&state.pool, &city).await?;

    let category_id = match category.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() && role_name != ROLE_CLIENT => {
            Some(CategoryRepo::get_or_create(&state.pool, name).await?.id)
        }
        _ => None,
    };

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            full_name: full_name.trim().to_string(),
            email,
            password_hash,
            role_id: role.id,
            city_id: Some(city.id),
            category_id,
            is_verified: true,
        },
    )
    .await?;

    tracing::info!(
        user_id = user.id,
        role = %role.name,
        city_id = city.id,
        category_id = ?category_id,
        "User registered",
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "User registered successfully",
            UserResponse::from_user(&user, role.name),
        )),
    ))
}

/// GET /api/auth/get
///
/// The authenticated caller's own account.
pub async fn current_user(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: auth.user_id,
            })
        })?;
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;

    Ok(Json(ApiResponse::ok(
        "User fetched successfully",
        UserResponse::from_user(&user, role),
    )))
}

/// POST /api/auth/login
///
/// Authenticate with email + password and issue an access token.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let invalid_credentials =
        || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid_credentials());
    }

    if !user.is_verified {
        return Err(AppError::Core(CoreError::Forbidden(
            "Please verify your account".into(),
        )));
    }

    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;

    let access_token = generate_access_token(user.id, &role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, role = %role, "User logged in");

    Ok(Json(ApiResponse::ok(
        "User logged in successfully",
        LoginResponse {
            access_token,
            expires_in: state.config.jwt.access_token_expiry_mins * 60,
            user: UserResponse::from_user(&user, role),
        },
    )))
}
