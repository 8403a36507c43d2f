//! HTTP server initialization and runtime setup.
//!
//! Builds the key-value store, wires the link service and runs the Axum server
//! until Ctrl-C or SIGTERM.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::repositories::ShortenedUrlRepository;
use crate::infrastructure::persistence::{MemoryUrlRepository, RedisUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::clock::{Clock, SystemClock};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Redis is configured but unreachable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let repository = build_repository(&config, clock.clone()).await?;

    let link_service =
        LinkService::new(repository, clock).with_default_ttl(config.default_ttl_days);
    let state = AppState::new(Arc::new(link_service), config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Creates the store selected by the configuration.
///
/// A configured Redis that cannot be reached aborts startup.
pub async fn build_repository(
    config: &Config,
    clock: Arc<dyn Clock>,
) -> Result<Arc<dyn ShortenedUrlRepository>> {
    match config.redis_url {
        Some(ref redis_url) => {
            let redis = RedisUrlRepository::connect(redis_url, config.key_prefix.clone())
                .await
                .context("Failed to initialise Redis store")?;
            tracing::info!("Store: Redis");
            Ok(Arc::new(redis))
        }
        None => {
            tracing::warn!("REDIS_URL not set, records are kept in memory only");
            Ok(Arc::new(MemoryUrlRepository::new(clock)))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
