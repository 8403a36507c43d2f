//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{alias}`  - Short link redirect
//! - `GET  /health`   - Store health check
//! - `POST /api/shorten` - Create a short alias
//!
//! Requests are traced and trailing slashes are trimmed.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
