//! Key-value store implementations of [`crate::domain::repositories::ShortenedUrlRepository`].
//!
//! # Repositories
//!
//! - [`RedisUrlRepository`] - Redis-backed store, expiry via `SET ... EXAT`
//! - [`MemoryUrlRepository`] - In-process store for development and tests

pub mod memory_url_repository;
pub mod redis_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use redis_url_repository::RedisUrlRepository;
