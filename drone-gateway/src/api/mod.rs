//! API Module
//!
//! HTTP API layer for the gateway.
//! Each submodule handles endpoints for a specific domain.

pub mod drone;
pub mod error;
pub mod health;
pub mod log;

#[cfg(test)]
pub mod testing;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use drone_client::{ConfigServiceClient, DroneSource, LogStore, LogStoreClient};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;

/// Shared handler state
///
/// Immutable after startup; cloning only bumps the reference counts.
#[derive(Clone)]
pub struct AppState {
    pub drones: Arc<dyn DroneSource>,
    pub logs: Arc<dyn LogStore>,
}

impl AppState {
    pub fn new(drones: Arc<dyn DroneSource>, logs: Arc<dyn LogStore>) -> Self {
        Self { drones, logs }
    }

    /// Builds the upstream clients described by the configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(ConfigServiceClient::new(config.config_service_url.clone())),
            Arc::new(LogStoreClient::new(
                config.log_store_url.clone(),
                config.pocket_api_key.clone(),
            )),
        )
    }
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/api/hello", get(health::hello))
        // Drone endpoints
        .route("/configs/{drone_id}", get(drone::get_config))
        .route("/status/{drone_id}", get(drone::get_status))
        // Log endpoints
        .route("/logs", post(log::create_log))
        .route("/logs/{drone_id}", get(log::get_drone_logs))
        // Add state and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
