//! Drone Gateway
//!
//! HTTP relay in front of the drone config service and the telemetry log store.
//!
//! Architecture:
//! - Configuration: fixed settings read from the environment at startup
//! - API: axum handlers, one module per endpoint group
//! - Services: validation and response shaping over the upstream clients
//!
//! Each request makes at most one upstream call; nothing is cached or shared
//! between requests beyond the immutable configuration.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod api;
pub mod config;
pub mod service;

use crate::api::AppState;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "drone_gateway=debug,drone_client=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Drone Gateway...");

    let config = Config::from_env();
    config.validate().context("Invalid configuration")?;

    tracing::info!(
        "Loaded configuration: config_service_url={}, log_store_url={}",
        config.config_service_url,
        config.log_store_url
    );
    if config.pocket_api_key.is_none() {
        tracing::warn!("POCKET_API_KEY is not set; log creation will be sent unauthenticated");
    }

    // Build router with all API endpoints
    let app = api::create_router(AppState::from_config(&config));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Drone Gateway stopped");

    Ok(())
}

/// Resolves on SIGINT or SIGTERM
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(err) => {
                tracing::warn!("Could not register SIGTERM handler: {}", err);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    tracing::info!("Shutdown signal received, draining connections");
}
