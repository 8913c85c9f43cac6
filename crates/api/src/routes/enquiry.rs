//! Route definitions for the `/enquiry` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::enquiry;
use crate::state::AppState;

/// Routes mounted at `/enquiry`.
///
/// ```text
/// GET    /                    -> list_enquiries (admin)
/// POST   /                    -> create_enquiry (client)
/// GET    /partner/{user_id}   -> list_partner_enquiries
/// PUT    /assign/{id}         -> assign_partners (admin)
/// PUT    /unassign/{id}       -> unassign_partners (admin)
/// GET    /{id}                -> get_enquiry
/// PATCH  /{id}                -> update_status (admin)
/// DELETE /{id}                -> delete_enquiry (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(enquiry::list_enquiries).post(enquiry::create_enquiry),
        )
        .route(
            "/partner/{user_id}",
            get(enquiry::list_partner_enquiries),
        )
        .route("/assign/{id}", put(enquiry::assign_partners))
        .route("/unassign/{id}", put(enquiry::unassign_partners))
        .route(
            "/{id}",
            get(enquiry::get_enquiry)
                .patch(enquiry::update_status)
                .delete(enquiry::delete_enquiry),
        )
}
