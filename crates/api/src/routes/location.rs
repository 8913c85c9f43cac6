//! Route definitions for the `/location` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::location;
use crate::state::AppState;

/// Routes mounted at `/location`.
///
/// ```text
/// GET    /      -> list_locations
/// POST   /      -> create_location (admin)
/// PUT    /{id}  -> update_location (admin)
/// DELETE /{id}  -> delete_location (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(location::list_locations).post(location::create_location),
        )
        .route(
            "/{id}",
            put(location::update_location).delete(location::delete_location),
        )
}
