//! Drone DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::drone::DroneRecord;
use crate::json::is_set;

/// Drone configuration returned by `GET /configs/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneConfig {
    pub drone_id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drone_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Value>,
}

impl From<DroneRecord> for DroneConfig {
    fn from(record: DroneRecord) -> Self {
        Self {
            drone_id: record.drone_id,
            drone_name: record.drone_name,
            light: record.light,
            country: record.country,
            weight: record.weight,
        }
    }
}

/// Drone condition returned by `GET /status/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneStatus {
    pub condition: Value,
}

impl DroneStatus {
    /// Extracts the status of a record, if its condition is set
    pub fn from_record(record: DroneRecord) -> Option<Self> {
        if !is_set(record.condition.as_ref()) {
            return None;
        }
        record.condition.map(|condition| Self { condition })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> DroneRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_config_projection() {
        let config = DroneConfig::from(record(json!({
            "drone_id": "D1",
            "drone_name": "Alpha",
            "light": true,
            "country": "US",
            "weight": 2.5,
            "condition": "ok"
        })));

        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "drone_id": "D1",
                "drone_name": "Alpha",
                "light": true,
                "country": "US",
                "weight": 2.5
            })
        );
    }

    #[test]
    fn test_status_requires_condition() {
        assert_eq!(
            DroneStatus::from_record(record(json!({ "drone_id": "D1", "condition": "ok" }))),
            Some(DroneStatus {
                condition: json!("ok")
            })
        );
        assert_eq!(
            DroneStatus::from_record(record(json!({ "drone_id": "D1" }))),
            None
        );
        assert_eq!(
            DroneStatus::from_record(record(json!({ "drone_id": "D1", "condition": "" }))),
            None
        );
    }
}
