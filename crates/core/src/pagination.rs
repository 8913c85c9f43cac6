//! Limit/offset clamping shared by list endpoints.

/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: i64 = 100;

/// Maximum page size for list endpoints.
pub const MAX_LIMIT: i64 = 500;

/// Page size from `?limit=`: `default` when absent, otherwise held to `[1, max]`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.map_or(default, |l| l.clamp(1, max.max(1)))
}

/// Rows to skip from `?offset=`; negative values read as 0.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.map_or(0, |o| o.max(0))
}
