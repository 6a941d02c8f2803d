//! Log domain types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::json::present;

/// A telemetry log entry as returned to API callers
///
/// Decoding a log store record into this type drops the store's bookkeeping
/// fields (`id`, `collectionId`, `updated`, ...). `created` is assigned by the
/// store. Absent fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub drone_id: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub drone_name: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub created: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub country: Option<Value>,

    /// Temperature reading in degrees Celsius
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub celsius: Option<Value>,
}
