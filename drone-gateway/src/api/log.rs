//! Log API Handlers
//!
//! HTTP endpoints for reading and recording drone telemetry logs.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use drone_core::domain::log::LogEntry;
use drone_core::dto::log::CreateLog;
use serde_json::Value;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::log_service;

/// GET /logs/{drone_id}
/// Get the most recent logs of a drone
pub async fn get_drone_logs(
    State(state): State<AppState>,
    Path(drone_id): Path<String>,
) -> ApiResult<Json<Vec<LogEntry>>> {
    tracing::debug!("Getting logs for drone: {}", drone_id);

    let logs = log_service::get_drone_logs(state.logs.as_ref(), &drone_id)
        .await
        .map_err(|e| match e {
            log_service::LogError::NotFound(_) => ApiError::NotFound("Logs not found".to_string()),
            // Listing validates nothing; kept so the match stays exhaustive
            log_service::LogError::ValidationError(msg) => ApiError::BadRequest(msg),
            log_service::LogError::Upstream(_) => {
                ApiError::InternalError("Failed to fetch logs".to_string())
            }
        })?;

    Ok(Json(logs))
}

/// POST /logs
/// Record a new log entry
pub async fn create_log(
    State(state): State<AppState>,
    payload: Result<Json<CreateLog>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!("Unreadable log body: {}", rejection.body_text());
        missing_details()
    })?;

    tracing::info!("Creating log for drone: {:?}", req.drone_id);

    let created = log_service::create_log(state.logs.as_ref(), req)
        .await
        .map_err(|e| match e {
            log_service::LogError::ValidationError(msg) => {
                tracing::warn!("Rejected log entry: {}", msg);
                missing_details()
            }
            // Creation never reports NotFound; any other failure is the store's
            log_service::LogError::NotFound(_) | log_service::LogError::Upstream(_) => {
                ApiError::InternalError("Could not create log entry".to_string())
            }
        })?;

    Ok((StatusCode::CREATED, Json(created)))
}

fn missing_details() -> ApiError {
    ApiError::BadRequest("Missing required log details".to_string())
}
