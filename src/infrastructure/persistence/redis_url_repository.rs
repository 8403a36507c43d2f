//! Redis implementation of the shortened URL store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, SetExpiry, SetOptions, aio::ConnectionManager};
use serde_json::json;
use tracing::{debug, error, info};

use crate::domain::entities::ShortenedUrlRecord;
use crate::domain::repositories::ShortenedUrlRepository;
use crate::error::AppError;

/// Redis store for alias -> long URL mappings.
///
/// Each record is a plain string key `<prefix><alias>` written with an absolute
/// expiry (`EXAT`), so Redis removes it once its TTL elapses. Errors are logged
/// and returned as [`AppError::Repository`].
pub struct RedisUrlRepository {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisUrlRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key_prefix` - Namespace prepended to every alias (`URLS_KEY_PREFIX`)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Repository`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> Result<Self, AppError> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            AppError::repository(
                "Failed to create Redis client",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            AppError::repository(
                "Failed to connect to Redis",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await.map_err(|e| {
            AppError::repository("Redis PING failed", json!({ "reason": e.to_string() }))
        })?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.into(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, alias: &str) -> String {
        format!("{}{}", self.key_prefix, alias)
    }
}

#[async_trait]
impl ShortenedUrlRepository for RedisUrlRepository {
    async fn save(&self, record: &ShortenedUrlRecord) -> Result<(), AppError> {
        let expire_at = u64::try_from(record.ttl).map_err(|_| {
            AppError::bad_request(
                "Record TTL must be a non-negative epoch timestamp",
                json!({ "ttl": record.ttl }),
            )
        })?;

        let key = self.build_key(&record.alias);
        let mut conn = self.client.clone();
        let options = SetOptions::default().with_expiration(SetExpiry::EXAT(expire_at));

        conn.set_options::<_, _, ()>(&key, &record.long_url, options)
            .await
            .map_err(|e| {
                error!("Redis SET error for {}: {}", record.alias, e);
                AppError::from(e)
            })?;

        debug!(
            "Stored {} -> {} (expires at {})",
            record.alias, record.long_url, record.ttl
        );
        Ok(())
    }

    async fn get_by_alias(&self, alias: &str) -> Result<Option<String>, AppError> {
        let key = self.build_key(alias);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(found) => {
                debug!("Lookup {}: {}", alias, if found.is_some() { "hit" } else { "miss" });
                Ok(found)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", alias, e);
                Err(e.into())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
