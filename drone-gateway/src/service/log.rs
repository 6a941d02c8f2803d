//! Log Service
//!
//! Business logic for drone telemetry logs.

use drone_client::{ClientError, LogStore};
use drone_core::domain::log::LogEntry;
use drone_core::dto::log::CreateLog;
use serde_json::Value;

/// Number of entries returned by a log listing
pub const LOG_PAGE_SIZE: usize = 25;

/// Service error type
///
/// `NotFound` only comes from listing and `ValidationError` only from creation.
#[derive(Debug)]
pub enum LogError {
    /// The store answered without an item list
    NotFound(String),
    /// The new entry is missing a required field
    ValidationError(String),
    /// The store could not be reached or rejected the request
    Upstream(ClientError),
}

impl From<ClientError> for LogError {
    fn from(err: ClientError) -> Self {
        LogError::Upstream(err)
    }
}

pub type Result<T> = std::result::Result<T, LogError>;

/// Get the most recent log entries of a drone, newest first
pub async fn get_drone_logs(store: &dyn LogStore, drone_id: &str) -> Result<Vec<LogEntry>> {
    let mut logs = match store.list_logs(drone_id, LOG_PAGE_SIZE).await {
        Ok(logs) => logs,
        Err(err) if err.is_missing_container() => {
            tracing::warn!("Log store returned no items for drone {}: {}", drone_id, err);
            return Err(LogError::NotFound(drone_id.to_string()));
        }
        Err(err) => {
            tracing::error!("Error fetching logs: {}", err);
            return Err(err.into());
        }
    };

    // The store honours the limit; this keeps the page size a guarantee
    logs.truncate(LOG_PAGE_SIZE);

    tracing::debug!("Fetched {} log entries for drone: {}", logs.len(), drone_id);

    Ok(logs)
}

/// Create a log entry
///
/// # Returns
/// The record created by the store, unchanged
pub async fn create_log(store: &dyn LogStore, entry: CreateLog) -> Result<Value> {
    if let Err(field) = entry.validate() {
        return Err(LogError::ValidationError(format!(
            "Missing required field: {}",
            field
        )));
    }

    let created = store.create_log(&entry).await.map_err(|err| {
        tracing::error!("Log creation error: {}", err);
        LogError::from(err)
    })?;

    tracing::info!("Created log entry for drone: {:?}", entry.drone_id);

    Ok(created)
}
