//! Drone Service
//!
//! Lookups against the config service.

use drone_client::{ClientError, DroneSource};
use drone_core::domain::drone::DroneRecord;
use drone_core::dto::drone::{DroneConfig, DroneStatus};

/// Service error type
#[derive(Debug)]
pub enum DroneError {
    /// The service answered but holds no such drone
    NotFound(String),
    /// The drone exists but has no condition set
    NoCondition(String),
    /// The service could not be queried or answered with something unusable
    Upstream(ClientError),
}

impl From<ClientError> for DroneError {
    fn from(err: ClientError) -> Self {
        DroneError::Upstream(err)
    }
}

pub type Result<T> = std::result::Result<T, DroneError>;

/// Get the configuration of a drone
pub async fn get_config(source: &dyn DroneSource, drone_id: &str) -> Result<DroneConfig> {
    let record = find_drone(source, drone_id).await?;

    Ok(DroneConfig::from(record))
}

/// Get the current condition of a drone
pub async fn get_status(source: &dyn DroneSource, drone_id: &str) -> Result<DroneStatus> {
    let record = find_drone(source, drone_id).await?;

    DroneStatus::from_record(record).ok_or_else(|| DroneError::NoCondition(drone_id.to_string()))
}

async fn find_drone(source: &dyn DroneSource, drone_id: &str) -> Result<DroneRecord> {
    match source.find_drone(drone_id).await {
        Ok(Some(record)) => Ok(record),
        Ok(None) => {
            tracing::debug!("Drone {} not found in config service", drone_id);
            Err(DroneError::NotFound(drone_id.to_string()))
        }
        Err(err) => {
            if err.is_upstream_unavailable() {
                tracing::error!("Fetch drone error: {}", err);
            } else {
                tracing::warn!("Fetch drone error: {}", err);
            }
            Err(err.into())
        }
    }
}
