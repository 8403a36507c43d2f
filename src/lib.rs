//! # TTL Shortener
//!
//! A small URL shortening service with deterministic aliases and store-native
//! expiry, built with Axum and Redis.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Record types and the key-value store trait
//! - **Core helpers** ([`utils`]) - Alias encoding, TTL computation, clock
//! - **Application Layer** ([`application`]) - Shorten / resolve orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Aliases
//!
//! An alias is the SHA-256 digest of the long URL, reduced modulo 10^12 and
//! written in base 62 (see [`utils::alias_encoder`]). The same URL always gets
//! the same alias; colliding URLs overwrite each other.
//!
//! ## Expiry
//!
//! Requests carry a TTL in days within `[1, 30)`. The absolute expiry is stored
//! with the record and enforced by the store itself.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # optional, in-memory otherwise
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{ShortenedUrlRecord, TtlBoundaries};
    pub use crate::domain::repositories::ShortenedUrlRepository;
    pub use crate::error::{AppError, ErrorKind};
    pub use crate::state::AppState;
    pub use crate::utils::clock::{Clock, FixedClock, SystemClock};
}
