pub mod auth;
pub mod category;
pub mod enquiry;
pub mod health;
pub mod location;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                  self-registration (public)
/// /auth/login                     login (public)
/// /auth/get                       current user (authenticated)
///
/// /enquiry                        list (admin), create (client)
/// /enquiry/{id}                   get (public), set status, delete (admin)
/// /enquiry/partner/{user_id}      enquiries assigned to a partner (public)
/// /enquiry/assign/{id}            append partners (admin)
/// /enquiry/unassign/{id}          remove partners (admin)
///
/// /category                       list (public), create (admin)
/// /category/{id}                  update, delete (admin)
/// /location                       list (public), create (admin)
/// /location/{id}                  update, delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/enquiry", enquiry::router())
        .nest("/category", category::router())
        .nest("/location", location::router())
}
