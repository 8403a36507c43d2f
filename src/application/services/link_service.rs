//! Link creation and resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};
use url::Url;

use crate::domain::entities::{ShortenedUrlRecord, TtlBoundaries};
use crate::domain::repositories::ShortenedUrlRepository;
use crate::error::AppError;
use crate::utils::alias_encoder::encode_alias;
use crate::utils::clock::Clock;
use crate::utils::ttl::{compute_expiry, is_valid_ttl};

/// TTL applied when a request does not specify one.
pub const DEFAULT_TTL_DAYS: i64 = 1;

/// Service for creating and resolving shortened links.
///
/// The store, the clock and the TTL policy are injected at construction.
pub struct LinkService {
    repository: Arc<dyn ShortenedUrlRepository>,
    clock: Arc<dyn Clock>,
    ttl_boundaries: TtlBoundaries,
    default_ttl_days: i64,
}

impl LinkService {
    /// Creates a link service with the default TTL policy (`[1, 30)` days,
    /// one day when unspecified).
    pub fn new(repository: Arc<dyn ShortenedUrlRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            ttl_boundaries: TtlBoundaries::DEFAULT,
            default_ttl_days: DEFAULT_TTL_DAYS,
        }
    }

    /// Overrides the TTL used when a request omits one.
    pub fn with_default_ttl(mut self, days: i64) -> Self {
        self.default_ttl_days = days;
        self
    }

    /// Shortens `long_url` and persists the record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - the URL is not an absolute `http`/`https` URL with a host
    /// - the TTL lies outside the accepted boundaries
    ///
    /// Returns [`AppError::Encoding`] if the URL's digest cannot be written with
    /// the alias alphabet, or encodes to an empty alias.
    ///
    /// Store failures are returned unchanged as [`AppError::Repository`].
    pub async fn shorten(
        &self,
        long_url: String,
        ttl_days: Option<i64>,
    ) -> Result<ShortenedUrlRecord, AppError> {
        validate_target(&long_url)?;

        let days = ttl_days.unwrap_or(self.default_ttl_days);
        if !is_valid_ttl(days, &self.ttl_boundaries) {
            return Err(AppError::bad_request(
                "TTL out of range",
                json!({
                    "ttl": days,
                    "lower_bound": self.ttl_boundaries.lower_bound(),
                    "upper_bound": self.ttl_boundaries.upper_bound(),
                }),
            ));
        }

        let alias = ensure_addressable(encode_alias(&long_url)?, &long_url)?;

        let ttl = compute_expiry(days, self.clock.now())?;
        let record = ShortenedUrlRecord::new(long_url, alias, ttl);

        self.repository.save(&record).await?;
        info!(
            alias = %record.alias,
            ttl = record.ttl,
            expires_at = ?record.expires_at(),
            "Shortened URL"
        );

        Ok(record)
    }

    /// Resolves an alias to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown or expired.
    /// Returns [`AppError::Repository`] on store errors.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        let found = self.repository.get_by_alias(alias).await?;
        debug!(alias, found = found.is_some(), "Resolved alias");

        found.ok_or_else(|| AppError::not_found("Short link not found", json!({ "alias": alias })))
    }

    /// Joins the public base URL and an alias.
    pub fn short_url(&self, base_url: &str, alias: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), alias)
    }

    /// Checks store connectivity.
    pub async fn store_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}

/// Rejects the empty alias, which `GET /{alias}` cannot reach.
fn ensure_addressable(alias: String, long_url: &str) -> Result<String, AppError> {
    if alias.is_empty() {
        return Err(AppError::encoding(
            "URL digest encodes to an empty alias",
            json!({ "long_url": long_url }),
        ));
    }
    Ok(alias)
}

/// Accepts only absolute `http`/`https` URLs with a host.
fn validate_target(long_url: &str) -> Result<(), AppError> {
    let parsed = Url::parse(long_url).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::bad_request(
            "Only http and https URLs can be shortened",
            json!({ "scheme": parsed.scheme() }),
        ));
    }

    if parsed.host().is_none() {
        return Err(AppError::bad_request(
            "URL must have a host",
            json!({ "url": long_url }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockShortenedUrlRepository;
    use crate::error::ErrorKind;
    use crate::utils::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn fixed_clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()))
    }

    fn service(repo: MockShortenedUrlRepository) -> LinkService {
        LinkService::new(Arc::new(repo), fixed_clock())
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut mock_repo = MockShortenedUrlRepository::new();
        mock_repo
            .expect_save()
            .withf(|record| {
                record.alias == "1xCrcw"
                    && record.long_url == "https://example.com"
                    && record.ttl == 1_704_153_600
            })
            .times(1)
            .returning(|_| Ok(()));

        let record = service(mock_repo)
            .shorten("https://example.com".to_string(), Some(1))
            .await
            .unwrap();

        assert_eq!(record.alias, "1xCrcw");
        assert_eq!(record.ttl, 1_704_153_600);
    }

    #[tokio::test]
    async fn test_shorten_uses_default_ttl() {
        let mut mock_repo = MockShortenedUrlRepository::new();
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let record = service(mock_repo)
            .with_default_ttl(7)
            .shorten("https://example.com".to_string(), None)
            .await
            .unwrap();

        // 2024-01-08T00:00:00Z
        assert_eq!(record.ttl, 1_704_672_000);
    }

    #[tokio::test]
    async fn test_shorten_rejects_upper_bound() {
        let mut mock_repo = MockShortenedUrlRepository::new();
        mock_repo.expect_save().times(0);

        let err = service(mock_repo)
            .shorten("https://example.com".to_string(), Some(30))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("TTL"));
    }

    #[tokio::test]
    async fn test_shorten_rejects_zero_ttl() {
        let mut mock_repo = MockShortenedUrlRepository::new();
        mock_repo.expect_save().times(0);

        let result = service(mock_repo)
            .shorten("https://example.com".to_string(), Some(0))
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_shorten_rejects_invalid_url() {
        let mut mock_repo = MockShortenedUrlRepository::new();
        mock_repo.expect_save().times(0);
        let service = service(mock_repo);

        for url in ["not-a-url", "javascript:alert(1)", "ftp://example.com/file"] {
            let result = service.shorten(url.to_string(), Some(1)).await;
            assert!(matches!(result, Err(AppError::Validation { .. })), "{url}");
        }
    }

    #[tokio::test]
    async fn test_shorten_propagates_repository_error() {
        let mut mock_repo = MockShortenedUrlRepository::new();
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_| Err(AppError::repository("store down", json!({}))));

        let err = service(mock_repo)
            .shorten("https://example.com".to_string(), Some(1))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Repository);
        assert_eq!(err.to_string(), "store down");
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock_repo = MockShortenedUrlRepository::new();
        mock_repo
            .expect_get_by_alias()
            .withf(|alias| alias == "1xCrcw")
            .times(1)
            .returning(|_| Ok(Some("https://example.com".to_string())));

        let url = service(mock_repo).resolve("1xCrcw").await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_repo = MockShortenedUrlRepository::new();
        mock_repo
            .expect_get_by_alias()
            .times(1)
            .returning(|_| Ok(None));

        let err = service(mock_repo).resolve("missing").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_empty_alias_is_rejected() {
        let err = ensure_addressable(String::new(), "https://example.com").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
        assert_eq!(
            ensure_addressable("1xCrcw".to_string(), "https://example.com").unwrap(),
            "1xCrcw"
        );
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let service = service(MockShortenedUrlRepository::new());

        assert_eq!(
            service.short_url("https://s.example.com/", "1xCrcw"),
            "https://s.example.com/1xCrcw"
        );
        assert_eq!(
            service.short_url("https://s.example.com", "1xCrcw"),
            "https://s.example.com/1xCrcw"
        );
    }
}
