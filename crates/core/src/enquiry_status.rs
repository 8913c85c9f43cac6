//! Enquiry status constants and validation.
//!
//! The status is a flat enumeration: any status may be set from any other.
//! The same literals are enforced by the `ck_enquiries_status` check
//! constraint in the database.

/// Freshly submitted by a client.
pub const STATUS_NEW: &str = "new";

/// A partner has responded to the client.
pub const STATUS_RESPONDED: &str = "responded";

/// The client booked a partner.
pub const STATUS_BOOKED: &str = "booked";

/// No further activity expected.
pub const STATUS_CLOSED: &str = "closed";

/// All valid status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_NEW, STATUS_RESPONDED, STATUS_BOOKED, STATUS_CLOSED];

/// Validate that a status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status value '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}
