//! Shared response envelope for API handlers.
//!
//! Every JSON body has the shape `{ "success": bool, "message": string,
//! "data"?: T }`. Error bodies are produced by [`crate::error::AppError`]
//! with the same `success`/`message` fields plus a machine-readable `code`.

use serde::Serialize;

/// Standard success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::ok("Enquiry found successfully", enquiry)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}
