//! Route definitions for the `/category` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/category`.
///
/// ```text
/// GET    /      -> list_categories
/// POST   /      -> create_category (admin)
/// PUT    /{id}  -> update_category (admin)
/// DELETE /{id}  -> delete_category (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(category::list_categories).post(category::create_category),
        )
        .route(
            "/{id}",
            put(category::update_category).delete(category::delete_category),
        )
}
