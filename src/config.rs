//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Store
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! ```
//!
//! or, by components:
//!
//! ```bash
//! export REDIS_HOST="localhost"
//! export REDIS_PORT="6379"
//! export REDIS_PASSWORD=""
//! export REDIS_DB="0"
//! ```
//!
//! When neither is set the service keeps its records in process memory.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public prefix for short URLs (default: `http://localhost:3000`)
//! - `URLS_KEY_PREFIX` - Namespace for store keys (default: `url:`)
//! - `DEFAULT_TTL_DAYS` - TTL when a request omits one (default: 1)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

use crate::application::services::link_service::DEFAULT_TTL_DAYS;
use crate::domain::entities::TtlBoundaries;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: Option<String>,
    pub listen_addr: String,
    pub base_url: String,
    pub key_prefix: String,
    pub default_ttl_days: i64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Malformed numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let redis_url = Self::load_redis_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let key_prefix = env::var("URLS_KEY_PREFIX").unwrap_or_else(|_| "url:".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let default_ttl_days = env::var("DEFAULT_TTL_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TTL_DAYS);

        Ok(Self {
            redis_url,
            listen_addr,
            base_url,
            key_prefix,
            default_ttl_days,
            log_level,
            log_format,
        })
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    ///
    /// Returns `None` if Redis is not configured.
    fn load_redis_url() -> Option<String> {
        if let Ok(url) = env::var("REDIS_URL") {
            return Some(url);
        }

        let host = env::var("REDIS_HOST").ok()?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let password = env::var("REDIS_PASSWORD").ok().filter(|p| !p.is_empty());
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        Some(match password {
            Some(pwd) => format!("redis://:{}@{}:{}/{}", pwd, host, port, db),
            None => format!("redis://{}:{}/{}", host, port, db),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an http(s) URL
    /// - the Redis URL has an unknown scheme
    /// - `default_ttl_days` lies outside the accepted TTL range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if let Some(ref redis_url) = self.redis_url
            && !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                mask_connection_string(redis_url)
            );
        }

        let bounds = TtlBoundaries::DEFAULT;
        if !bounds.contains(self.default_ttl_days) {
            anyhow::bail!(
                "DEFAULT_TTL_DAYS must be in [{}, {}), got {}",
                bounds.lower_bound(),
                bounds.upper_bound(),
                self.default_ttl_days
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);

        match self.redis_url {
            Some(ref redis_url) => tracing::info!(
                "  Store: Redis {} (prefix '{}')",
                mask_connection_string(redis_url),
                self.key_prefix
            ),
            None => tracing::info!("  Store: in-memory"),
        }

        tracing::info!("  Default TTL: {} day(s)", self.default_ttl_days);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks the password in connection strings for logging.
///
/// `redis://:password@host:port/db` → `redis://:***@host:port/db`
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let rest = &url[start + 3..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// Expects `.env` to be already loaded (see `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
