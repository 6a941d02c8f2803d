//! Drone API Handlers
//!
//! HTTP endpoints for drone configuration and status.

use axum::{
    Json,
    extract::{Path, State},
};
use drone_core::dto::drone::{DroneConfig, DroneStatus};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::drone_service;

/// GET /configs/{drone_id}
/// Get the configuration of a drone
pub async fn get_config(
    State(state): State<AppState>,
    Path(drone_id): Path<String>,
) -> ApiResult<Json<DroneConfig>> {
    tracing::debug!("Getting config for drone: {}", drone_id);

    // Lookup failures of any kind surface as a missing config
    let config = drone_service::get_config(state.drones.as_ref(), &drone_id)
        .await
        .map_err(|_| ApiError::NotFound("Drone config not found".to_string()))?;

    Ok(Json(config))
}

/// GET /status/{drone_id}
/// Get the current condition of a drone
pub async fn get_status(
    State(state): State<AppState>,
    Path(drone_id): Path<String>,
) -> ApiResult<Json<DroneStatus>> {
    tracing::debug!("Getting status for drone: {}", drone_id);

    let status = drone_service::get_status(state.drones.as_ref(), &drone_id)
        .await
        .map_err(|e| match e {
            drone_service::DroneError::NotFound(_)
            | drone_service::DroneError::NoCondition(_)
            | drone_service::DroneError::Upstream(_) => {
                ApiError::NotFound("Condition not found".to_string())
            }
        })?;

    Ok(Json(status))
}
