//! Input parsing rules for the enquiry workflow.
//!
//! Covers the requested service date and the partner id lists accepted by
//! the assign/unassign endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::types::{DbId, Timestamp};

/// Parse a requested service date.
///
/// Accepts a plain calendar date (`2024-05-01`, taken as midnight UTC) or a
/// full RFC 3339 timestamp (`2024-05-01T10:30:00+05:30`, converted to UTC).
pub fn parse_service_date(raw: &str) -> Result<Timestamp, String> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            format!("Invalid date '{raw}'. Expected YYYY-MM-DD or an RFC 3339 timestamp")
        })
}

/// Parse a single partner id from a JSON value.
///
/// Ids are positive integers, given either as JSON numbers or as strings
/// holding the decimal digits.
fn parse_partner_id(value: &Value) -> Option<DbId> {
    let id = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse::<DbId>().ok()?,
        _ => return None,
    };
    (id > 0).then_some(id)
}

/// Parse the `partners` list of an assign/unassign request.
///
/// The list must be non-empty and every element must be a valid id; a single
/// malformed element rejects the whole list. Order and repeats are kept.
pub fn parse_partner_ids(values: &[Value]) -> Result<Vec<DbId>, String> {
    if values.is_empty() {
        return Err("Partners are required".to_string());
    }

    values
        .iter()
        .map(|v| parse_partner_id(v).ok_or_else(|| format!("Please provide valid partners: {v}")))
        .collect()
}
