//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireRole`] -- Requires the caller's role to be in a fixed set.
//! - [`rbac::RequireAdmin`] / [`rbac::RequireClient`] -- the role sets used by routes.

pub mod auth;
pub mod rbac;
