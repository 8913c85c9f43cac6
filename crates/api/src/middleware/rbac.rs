//! Role-based access control (RBAC) extractors.
//!
//! Authorization is declared in the handler signature: a handler taking
//! [`RequireAdmin`] is never entered by a non-admin. The check itself lives
//! in one place, [`RequireRole`], parameterized by a [`RoleSet`].

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use pixisphere_core::error::CoreError;
use pixisphere_core::roles::{ROLE_ADMIN, ROLE_CLIENT};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// A fixed set of roles allowed to perform an operation.
pub trait RoleSet {
    /// Role names that pass the check.
    const ALLOWED: &'static [&'static str];
    /// Message returned with the 403 when the check fails.
    const DENIED_MESSAGE: &'static str;

    /// Whether `role` is a member of this set.
    fn permits(role: &str) -> bool {
        Self::ALLOWED.contains(&role)
    }
}

/// Only admins.
pub struct Admins;

impl RoleSet for Admins {
    const ALLOWED: &'static [&'static str] = &[ROLE_ADMIN];
    const DENIED_MESSAGE: &'static str = "Admin role required";
}

/// Only clients.
pub struct Clients;

impl RoleSet for Clients {
    const ALLOWED: &'static [&'static str] = &[ROLE_CLIENT];
    const DENIED_MESSAGE: &'static str = "Only clients can create enquiries";
}

/// Authenticated user whose role is in `R::ALLOWED`.
///
/// Rejects with 401 when unauthenticated and 403 when the role is not in
/// the set.
///
/// ```ignore
/// async fn admin_only(admin: RequireAdmin) -> AppResult<Json<()>> {
///     tracing::info!(user_id = admin.user.user_id, "admin action");
///     Ok(Json(()))
/// }
/// ```
pub struct RequireRole<R: RoleSet> {
    pub user: AuthUser,
    _roles: PhantomData<R>,
}

/// Requires the `admin` role.
pub type RequireAdmin = RequireRole<Admins>;

/// Requires the `client` role.
pub type RequireClient = RequireRole<Clients>;

impl<R: RoleSet> FromRequestParts<AppState> for RequireRole<R> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !R::permits(&user.role) {
            tracing::debug!(user_id = user.user_id, role = %user.role, "Role check failed");
            return Err(AppError::Core(CoreError::Forbidden(
                R::DENIED_MESSAGE.into(),
            )));
        }
        Ok(RequireRole {
            user,
            _roles: PhantomData,
        })
    }
}
