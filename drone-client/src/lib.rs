//! Drone Upstream Clients
//!
//! Typed HTTP clients for the two services the relay sits in front of:
//!
//! - [`ConfigServiceClient`]: the spreadsheet-backed drone config/status service
//! - [`LogStoreClient`]: the record store holding drone telemetry logs
//!
//! Each client implements a small trait ([`DroneSource`], [`LogStore`]) so the
//! gateway can be exercised without either upstream.
//!
//! # Example
//!
//! ```no_run
//! use drone_client::{ConfigServiceClient, DroneSource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ConfigServiceClient::new("https://example.com/exec");
//!
//!     if let Some(drone) = client.find_drone("D1").await? {
//!         println!("Found drone: {:?}", drone.drone_name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod drones;
mod logs;

// Re-export commonly used types
pub use drones::{ConfigServiceClient, DroneSource};
pub use error::{ClientError, Result};
pub use logs::{LogStore, LogStoreClient};

use serde::de::DeserializeOwned;

// =============================================================================
// Response Handlers
// =============================================================================

/// Check the status of an upstream response
///
/// Returns the response untouched if it succeeded, or an [`ClientError::ApiError`]
/// carrying the body text otherwise.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    Ok(response)
}

/// Handle an upstream response and deserialize JSON
///
/// Checks the status code and returns an appropriate error if the request
/// failed, or deserializes the response body if successful.
async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    check_status(response)
        .await?
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
}
