//! Repository trait definitions for the domain layer.
//!
//! The key-value store is abstracted behind [`ShortenedUrlRepository`].
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are auto-generated via `mockall` for unit tests.

pub mod shortened_url_repository;

pub use shortened_url_repository::ShortenedUrlRepository;

#[cfg(test)]
pub use shortened_url_repository::MockShortenedUrlRepository;
