//! Log DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::json::{is_set, present};

/// Request body of `POST /logs`
///
/// Every field is optional at the decoding stage so that an incomplete body
/// reaches [`CreateLog::validate`] instead of failing inside the extractor.
/// The same type is forwarded to the log store once validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateLog {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub drone_id: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub drone_name: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub country: Option<Value>,

    /// Must be present, but may be any value including `null` or `0`
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub celsius: Option<Value>,
}

impl CreateLog {
    /// Checks that the required fields are present.
    ///
    /// Returns the name of the first missing field on failure.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !is_set(self.drone_id.as_ref()) {
            return Err("drone_id");
        }
        if !is_set(self.drone_name.as_ref()) {
            return Err("drone_name");
        }
        if !is_set(self.country.as_ref()) {
            return Err("country");
        }
        if self.celsius.is_none() {
            return Err("celsius");
        }
        Ok(())
    }
}
