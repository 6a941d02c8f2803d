//! Log store client
//!
//! The log store is a record collection API. Listing takes a `filter`
//! expression plus `sort` and `limit` and answers `{ "items": [...] }`;
//! creating a record is a bearer-authenticated POST of the record body.

use async_trait::async_trait;
use drone_core::domain::log::LogEntry;
use drone_core::dto::log::CreateLog;
use reqwest::Client;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::{check_status, handle_response};

/// Store of drone telemetry logs
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Lists the most recent log entries of a drone, newest first
    ///
    /// # Arguments
    /// * `drone_id` - The drone whose logs to fetch
    /// * `limit` - Maximum number of entries to return
    async fn list_logs(&self, drone_id: &str, limit: usize) -> Result<Vec<LogEntry>>;

    /// Creates a log entry
    ///
    /// # Returns
    /// The record as stored, in the store's own shape
    async fn create_log(&self, entry: &CreateLog) -> Result<Value>;
}

/// HTTP client for the log store
#[derive(Debug, Clone)]
pub struct LogStoreClient {
    /// Records endpoint of the log collection
    url: String,
    /// Bearer credential for writes
    api_key: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl LogStoreClient {
    /// Create a new log store client
    ///
    /// # Arguments
    /// * `url` - The records endpoint of the log collection
    /// * `api_key` - Bearer credential sent with writes, if any
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self::with_client(url, api_key, Client::new())
    }

    /// Create a new log store client with a custom HTTP client
    pub fn with_client(url: impl Into<String>, api_key: Option<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            api_key,
            client,
        }
    }

    /// Get the records endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Builds the filter expression selecting one drone's records
///
/// Quotes and backslashes in the id are escaped so the value cannot terminate
/// the string literal early.
pub(crate) fn drone_filter(drone_id: &str) -> String {
    let mut escaped = String::with_capacity(drone_id.len());
    for c in drone_id.chars() {
        if c == '\'' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("(drone_id='{}')", escaped)
}

#[async_trait]
impl LogStore for LogStoreClient {
    async fn list_logs(&self, drone_id: &str, limit: usize) -> Result<Vec<LogEntry>> {
        tracing::debug!("Fetching up to {} logs for drone: {}", limit, drone_id);

        let limit = limit.to_string();
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("filter", drone_filter(drone_id).as_str()),
                ("sort", "-created"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let bytes = check_status(response).await?.bytes().await?;

        // A successful answer that isn't JSON at all (maintenance page, empty
        // body) carries no item list, same as a JSON body without `items`
        let mut body: Value = match serde_json::from_slice(&bytes) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Log store returned a non-JSON body: {}", e);
                return Err(ClientError::MissingContainer("items"));
            }
        };

        match body.get_mut("items").map(Value::take) {
            None | Some(Value::Null) => Err(ClientError::MissingContainer("items")),
            Some(items) => serde_json::from_value(items)
                .map_err(|e| ClientError::ParseError(format!("Invalid log items: {}", e))),
        }
    }

    async fn create_log(&self, entry: &CreateLog) -> Result<Value> {
        tracing::debug!("Creating log entry for drone: {:?}", entry.drone_id);

        let mut request = self.client.post(&self.url).json(entry);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        handle_response(response).await
    }
}
