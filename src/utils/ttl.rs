//! TTL validation and expiry computation.

use crate::domain::entities::TtlBoundaries;
use crate::error::AppError;
use chrono::{DateTime, TimeDelta, Utc};
use serde_json::json;

/// Returns true if `days` lies within `[bounds.lower_bound, bounds.upper_bound)`.
pub fn is_valid_ttl(days: i64, bounds: &TtlBoundaries) -> bool {
    bounds.contains(days)
}

/// Computes `now + days_from_now` days as UNIX epoch seconds.
///
/// Sub-second precision of `now` is truncated.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the resulting instant is not
/// representable.
pub fn compute_expiry(days_from_now: i64, now: DateTime<Utc>) -> Result<i64, AppError> {
    TimeDelta::try_days(days_from_now)
        .and_then(|delta| now.checked_add_signed(delta))
        .map(|expiry| expiry.timestamp())
        .ok_or_else(|| {
            AppError::bad_request(
                "TTL is out of the representable time range",
                json!({ "ttl": days_from_now }),
            )
        })
}

/// Converts epoch seconds back into a UTC instant, if representable.
pub fn expiry_instant(epoch_seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(epoch_seconds, 0)
}
