//! Health Check API Handlers
//!
//! Liveness endpoints that never touch an upstream.

use axum::{Json, http::StatusCode, response::IntoResponse};
use drone_core::dto::Hello;

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /api/hello
/// Fixed greeting used by front-ends to check connectivity
pub async fn hello() -> Json<Hello> {
    Json(Hello::default())
}
