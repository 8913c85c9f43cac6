//! Normalization of free-text reference-data names.
//!
//! Category names are case-folded so "Wedding" and "wedding" resolve to the
//! same row. City names keep their casing; only surrounding whitespace is
//! dropped.

/// Normalize a category name: trim and lowercase.
pub fn normalize_category_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Normalize a city name: trim only, case is preserved.
pub fn normalize_city_name(city: &str) -> String {
    city.trim().to_string()
}

/// Reject a required text field that is empty after trimming.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    Ok(())
}
