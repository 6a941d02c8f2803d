//! In-memory upstreams for tests

use std::sync::Mutex;

use async_trait::async_trait;
use drone_client::{ClientError, DroneSource, LogStore, Result};
use drone_core::domain::drone::DroneRecord;
use drone_core::domain::log::LogEntry;
use drone_core::dto::log::CreateLog;
use serde_json::{Value, json};

/// Config service stand-in holding raw rows
pub struct FakeDrones {
    rows: Vec<Value>,
    failing: bool,
}

impl FakeDrones {
    pub fn new(rows: Vec<Value>) -> Self {
        Self {
            rows,
            failing: false,
        }
    }

    pub fn with_alpha() -> Self {
        Self::new(vec![json!({
            "drone_id": "D1",
            "drone_name": "Alpha",
            "light": true,
            "country": "US",
            "weight": 2.5,
            "condition": "ok"
        })])
    }

    pub fn failing() -> Self {
        Self {
            rows: vec![],
            failing: true,
        }
    }
}

#[async_trait]
impl DroneSource for FakeDrones {
    async fn find_drone(&self, drone_id: &str) -> Result<Option<DroneRecord>> {
        if self.failing {
            return Err(ClientError::api_error(502, "bad gateway"));
        }

        Ok(self
            .rows
            .iter()
            .filter_map(|row| serde_json::from_value::<DroneRecord>(row.clone()).ok())
            .find(|record| record.is(drone_id)))
    }
}

/// Log store stand-in recording what it was asked to do
pub struct FakeLogs {
    items: Option<Vec<LogEntry>>,
    failing: bool,
    last_limit: Mutex<Option<usize>>,
    created: Mutex<Vec<CreateLog>>,
}

impl FakeLogs {
    pub fn with_items(items: Vec<LogEntry>) -> Self {
        Self {
            items: Some(items),
            failing: false,
            last_limit: Mutex::new(None),
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn without_items() -> Self {
        Self {
            items: None,
            ..Self::with_items(vec![])
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::with_items(vec![])
        }
    }

    pub fn last_limit(&self) -> Option<usize> {
        *self.last_limit.lock().unwrap()
    }

    pub fn created(&self) -> Vec<CreateLog> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogStore for FakeLogs {
    async fn list_logs(&self, drone_id: &str, limit: usize) -> Result<Vec<LogEntry>> {
        *self.last_limit.lock().unwrap() = Some(limit);

        if self.failing {
            return Err(ClientError::api_error(503, "unavailable"));
        }

        let items = self
            .items
            .clone()
            .ok_or(ClientError::MissingContainer("items"))?;

        Ok(items
            .into_iter()
            .filter(|entry| entry.drone_id.as_ref() == Some(&json!(drone_id)))
            .collect())
    }

    async fn create_log(&self, entry: &CreateLog) -> Result<Value> {
        if self.failing {
            return Err(ClientError::api_error(503, "unavailable"));
        }

        let mut created = self.created.lock().unwrap();
        created.push(entry.clone());

        let mut record = serde_json::to_value(entry).unwrap();
        record["id"] = json!(format!("rec{}", created.len()));
        record["collectionName"] = json!("drone_logs");
        record["created"] = json!("2024-05-01 10:00:00.000Z");
        Ok(record)
    }
}

/// `count` entries for one drone, newest first
pub fn log_entries(drone_id: &str, count: usize) -> Vec<LogEntry> {
    (0..count)
        .rev()
        .map(|i| LogEntry {
            drone_id: Some(json!(drone_id)),
            drone_name: Some(json!("Alpha")),
            created: Some(json!(format!("2024-05-01 10:{:02}:00.000Z", i))),
            country: Some(json!("US")),
            celsius: Some(json!(20 + i)),
        })
        .collect()
}
