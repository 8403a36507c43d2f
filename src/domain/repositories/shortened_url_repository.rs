//! Repository trait for the alias -> long URL key-value store.

use crate::domain::entities::ShortenedUrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Key-value store holding shortened URLs with store-native expiry.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedisUrlRepository`] - Redis, `SET ... EXAT`
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenedUrlRepository: Send + Sync {
    /// Persists a record; an existing record under the same alias is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Repository`] on any backend failure.
    async fn save(&self, record: &ShortenedUrlRecord) -> Result<(), AppError>;

    /// Returns the long URL stored under `alias`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if a live record exists
    /// - `Ok(None)` if the alias is unknown or has expired
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Repository`] on any backend failure.
    async fn get_by_alias(&self, alias: &str) -> Result<Option<String>, AppError>;

    /// Checks if the store backend is reachable.
    async fn health_check(&self) -> bool;
}
