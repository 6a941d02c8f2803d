//! Drone domain model
//!
//! A drone as described by the upstream config service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::json::{matches_id, present};

/// A drone row from the config service
///
/// Only `drone_id` is required. The descriptive fields are opaque JSON values:
/// the spreadsheet behind the service does not enforce types, so they are
/// passed through exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneRecord {
    /// Identifier, string or number depending on the sheet
    pub drone_id: Value,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub drone_name: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub light: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub country: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub weight: Option<Value>,

    /// Current operating condition
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub condition: Option<Value>,
}

impl DroneRecord {
    /// Returns true if this record is the drone identified by `id`
    pub fn is(&self, id: &str) -> bool {
        matches_id(&self.drone_id, id)
    }
}
