//! Well-known role name constants.
//!
//! These must match the seed data in `20250101000002_create_roles_and_users.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_PARTNER: &str = "partner";
pub const ROLE_CLIENT: &str = "client";

/// Roles a caller may pick for themselves at registration. Admin accounts
/// are provisioned out of band.
pub const SELF_REGISTER_ROLES: &[&str] = &[ROLE_CLIENT, ROLE_PARTNER];

/// Check that `role` may be chosen at registration.
pub fn validate_registration_role(role: &str) -> Result<(), String> {
    if SELF_REGISTER_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(format!(
            "Invalid role '{role}'. Must be one of: {}",
            SELF_REGISTER_ROLES.join(", ")
        ))
    }
}
