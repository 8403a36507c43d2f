//! Accepted TTL range for new shortened URLs.

use crate::error::AppError;
use serde_json::json;

/// Half-open range `[lower_bound, upper_bound)` of TTL day counts.
///
/// Both bounds are positive and `lower_bound < upper_bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlBoundaries {
    lower_bound: i64,
    upper_bound: i64,
}

impl TtlBoundaries {
    /// One day minimum, 30 days exclusive maximum.
    pub const DEFAULT: Self = Self {
        lower_bound: 1,
        upper_bound: 30,
    };

    /// Creates boundaries, rejecting empty or non-positive ranges.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `lower_bound < 1` or
    /// `lower_bound >= upper_bound`.
    pub fn new(lower_bound: i64, upper_bound: i64) -> Result<Self, AppError> {
        if lower_bound < 1 || lower_bound >= upper_bound {
            return Err(AppError::bad_request(
                "TTL boundaries must be positive with lower < upper",
                json!({ "lower_bound": lower_bound, "upper_bound": upper_bound }),
            ));
        }

        Ok(Self {
            lower_bound,
            upper_bound,
        })
    }

    pub fn lower_bound(&self) -> i64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> i64 {
        self.upper_bound
    }

    /// True if `days` lies in `[lower_bound, upper_bound)`.
    pub fn contains(&self, days: i64) -> bool {
        (self.lower_bound..self.upper_bound).contains(&days)
    }
}

impl Default for TtlBoundaries {
    fn default() -> Self {
        Self::DEFAULT
    }
}
