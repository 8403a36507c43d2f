//! Core domain entities.
//!
//! - [`ShortenedUrlRecord`] - A persisted alias -> long URL mapping with expiry
//! - [`TtlBoundaries`] - Accepted range of TTL day counts

pub mod shortened_url;
pub mod ttl_boundaries;

pub use shortened_url::ShortenedUrlRecord;
pub use ttl_boundaries::TtlBoundaries;
