//! In-memory implementation of the shortened URL store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::ShortenedUrlRecord;
use crate::domain::repositories::ShortenedUrlRepository;
use crate::error::AppError;
use crate::utils::clock::Clock;

/// Process-local store with the same expiry semantics as Redis `EXAT`.
///
/// A record is visible while `clock.now()` is strictly before its `ttl`.
/// Expired entries are dropped on every write and when looked up.
pub struct MemoryUrlRepository {
    records: RwLock<HashMap<String, ShortenedUrlRecord>>,
    clock: Arc<dyn Clock>,
}

impl MemoryUrlRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        debug!("Using in-memory URL store");
        Self {
            records: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Number of stored records, including ones that expired since the last
    /// write and were not looked up.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ShortenedUrlRepository for MemoryUrlRepository {
    async fn save(&self, record: &ShortenedUrlRecord) -> Result<(), AppError> {
        let now = self.clock.now();
        let mut records = self.records.write().await;

        let before = records.len();
        records.retain(|_, r| !r.is_expired_at(now));
        let evicted = before - records.len();
        if evicted > 0 {
            debug!("Evicted {} expired record(s)", evicted);
        }

        records.insert(record.alias.clone(), record.clone());
        Ok(())
    }

    async fn get_by_alias(&self, alias: &str) -> Result<Option<String>, AppError> {
        let now = self.clock.now();

        {
            let records = self.records.read().await;
            match records.get(alias) {
                None => return Ok(None),
                Some(record) if !record.is_expired_at(now) => {
                    return Ok(Some(record.long_url.clone()));
                }
                Some(_) => {}
            }
        }

        let mut records = self.records.write().await;
        if records.get(alias).is_some_and(|r| r.is_expired_at(now)) {
            records.remove(alias);
            debug!("Evicted expired alias {}", alias);
        }
        Ok(None)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
