#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;
use ttl_shortener::application::services::LinkService;
use ttl_shortener::domain::entities::ShortenedUrlRecord;
use ttl_shortener::domain::repositories::ShortenedUrlRepository;
use ttl_shortener::error::AppError;
use ttl_shortener::infrastructure::persistence::MemoryUrlRepository;
use ttl_shortener::state::AppState;
use ttl_shortener::utils::clock::FixedClock;

pub const BASE_URL: &str = "https://s.example.com";

/// 2024-01-01T00:00:00Z
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    create_test_state_at(test_now())
}

pub fn create_test_state_at(now: DateTime<Utc>) -> (AppState, Arc<MemoryUrlRepository>) {
    let clock = Arc::new(FixedClock(now));
    let repository = Arc::new(MemoryUrlRepository::new(clock.clone()));

    let link_service = Arc::new(LinkService::new(repository.clone(), clock));

    (AppState::new(link_service, BASE_URL), repository)
}

pub async fn create_test_record(repository: &MemoryUrlRepository, alias: &str, url: &str, ttl: i64) {
    repository
        .save(&ShortenedUrlRecord::new(url, alias, ttl))
        .await
        .unwrap();
}

/// Store whose backend is always unreachable.
pub struct UnavailableRepository;

#[async_trait]
impl ShortenedUrlRepository for UnavailableRepository {
    async fn save(&self, _record: &ShortenedUrlRecord) -> Result<(), AppError> {
        Err(AppError::repository("Key-value store error", json!({ "reason": "connection refused" })))
    }

    async fn get_by_alias(&self, _alias: &str) -> Result<Option<String>, AppError> {
        Err(AppError::repository("Key-value store error", json!({ "reason": "connection refused" })))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_unavailable_state() -> AppState {
    let clock = Arc::new(FixedClock(test_now()));
    let link_service = Arc::new(LinkService::new(Arc::new(UnavailableRepository), clock));

    AppState::new(link_service, BASE_URL)
}
