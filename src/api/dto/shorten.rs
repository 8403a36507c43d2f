//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortenedUrlRecord;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Days until the link expires. Defaults to the service's default TTL.
    pub ttl: Option<i64>,
}

/// Created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub alias: String,
    pub short_url: String,
    pub long_url: String,
    /// Absolute expiry in UNIX epoch seconds.
    pub ttl: i64,
}

impl ShortenResponse {
    pub fn from_record(record: ShortenedUrlRecord, short_url: String) -> Self {
        Self {
            alias: record.alias,
            short_url,
            long_url: record.long_url,
            ttl: record.ttl,
        }
    }
}
