//! Shortened URL record stored in the key-value store.

use chrono::{DateTime, Utc};

use crate::utils::ttl::expiry_instant;

/// Mapping between an alias and its long URL.
///
/// `ttl` is the absolute expiry in UNIX epoch seconds. Records are immutable
/// once persisted; the store drops them on its own once `ttl` has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrlRecord {
    pub long_url: String,
    pub alias: String,
    pub ttl: i64,
}

impl ShortenedUrlRecord {
    /// Creates a new record.
    pub fn new(long_url: impl Into<String>, alias: impl Into<String>, ttl: i64) -> Self {
        Self {
            long_url: long_url.into(),
            alias: alias.into(),
            ttl,
        }
    }

    /// Returns true once `now` has reached the expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.ttl
    }

    /// Expiry as a UTC timestamp, if representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        expiry_instant(self.ttl)
    }
}
