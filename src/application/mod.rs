//! Application layer services implementing business logic.
//!
//! Services orchestrate the pure alias/TTL helpers and the key-value store,
//! and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
