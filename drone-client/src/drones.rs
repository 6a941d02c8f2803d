//! Config service client
//!
//! The config service is a spreadsheet exposed over a single GET endpoint. It
//! takes `?id=` and answers `{ "data": [ ...rows ] }`; the id is only a hint,
//! so the rows still have to be searched for the requested drone.

use async_trait::async_trait;
use drone_core::domain::drone::DroneRecord;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::handle_response;

/// Source of drone records
#[async_trait]
pub trait DroneSource: Send + Sync {
    /// Looks up a drone by identifier
    ///
    /// # Returns
    /// `Ok(None)` if the service answered but holds no such drone
    async fn find_drone(&self, drone_id: &str) -> Result<Option<DroneRecord>>;
}

/// HTTP client for the config service
#[derive(Debug, Clone)]
pub struct ConfigServiceClient {
    /// Full endpoint URL of the service
    url: String,
    /// HTTP client instance
    client: Client,
}

impl ConfigServiceClient {
    /// Create a new config service client
    ///
    /// # Arguments
    /// * `url` - The endpoint of the config service
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, Client::new())
    }

    /// Create a new config service client with a custom HTTP client
    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Envelope returned by the config service
#[derive(Debug, Deserialize)]
struct ConfigResponse {
    #[serde(default)]
    data: Option<Vec<Value>>,
}

#[async_trait]
impl DroneSource for ConfigServiceClient {
    async fn find_drone(&self, drone_id: &str) -> Result<Option<DroneRecord>> {
        tracing::debug!("Querying config service for drone: {}", drone_id);

        let response = self
            .client
            .get(&self.url)
            .query(&[("id", drone_id)])
            .send()
            .await?;

        let body: ConfigResponse = handle_response(response).await?;
        let rows = body.data.ok_or(ClientError::MissingContainer("data"))?;

        // Rows without a usable drone_id are skipped rather than failing the lookup
        let record = rows
            .into_iter()
            .filter_map(|row| serde_json::from_value::<DroneRecord>(row).ok())
            .find(|record| record.is(drone_id));

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount(server: &MockServer, body: Value) {
        Mock::given(method("GET"))
            .and(query_param("id", "D1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_find_drone_scans_rows() {
        let server = MockServer::start().await;
        mount(
            &server,
            json!({
                "data": [
                    { "drone_id": "D0", "drone_name": "Zero" },
                    { "drone_id": "D1", "drone_name": "Alpha", "condition": "ok" }
                ]
            }),
        )
        .await;

        let client = ConfigServiceClient::new(server.uri());
        let record = client.find_drone("D1").await.unwrap().unwrap();

        assert_eq!(record.drone_name, Some(json!("Alpha")));
        assert_eq!(record.condition, Some(json!("ok")));
    }

    #[tokio::test]
    async fn test_find_drone_no_match() {
        let server = MockServer::start().await;
        mount(&server, json!({ "data": [{ "drone_id": "D2" }] })).await;

        let client = ConfigServiceClient::new(server.uri());
        assert!(client.find_drone("D1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_drone_skips_rows_without_id() {
        let server = MockServer::start().await;
        mount(
            &server,
            json!({ "data": [null, "garbage", { "drone_name": "no id" }, { "drone_id": "D1" }] }),
        )
        .await;

        let client = ConfigServiceClient::new(server.uri());
        assert!(client.find_drone("D1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_find_drone_missing_data_container() {
        let server = MockServer::start().await;
        mount(&server, json!({ "error": "sheet unavailable" })).await;

        let client = ConfigServiceClient::new(server.uri());
        let err = client.find_drone("D1").await.unwrap_err();
        assert!(err.is_missing_container());
    }

    #[tokio::test]
    async fn test_find_drone_null_data_container() {
        let server = MockServer::start().await;
        mount(&server, json!({ "data": null })).await;

        let client = ConfigServiceClient::new(server.uri());
        let err = client.find_drone("D1").await.unwrap_err();
        assert!(err.is_missing_container());
    }

    #[tokio::test]
    async fn test_find_drone_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let client = ConfigServiceClient::new(server.uri());
        let err = client.find_drone("D1").await.unwrap_err();
        assert!(matches!(err, ClientError::ApiError { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_find_drone_unreachable() {
        let client = ConfigServiceClient::new("http://127.0.0.1:1");
        let err = client.find_drone("D1").await.unwrap_err();
        assert!(matches!(err, ClientError::RequestFailed(_)));
        assert!(err.is_upstream_unavailable());
    }
}
