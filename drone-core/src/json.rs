//! Helpers for loosely typed upstream JSON
//!
//! Both upstream services return schemaless JSON. Fields are carried through as
//! [`serde_json::Value`] and these helpers answer the few questions the relay
//! needs to ask about them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Returns true if the value counts as "set" for validation purposes.
///
/// `null`, `false`, `0`, `NaN` and the empty string are not truthy; every
/// other value (including empty arrays and objects) is.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Like [`is_truthy`], for fields that may be missing entirely.
pub fn is_set(value: Option<&Value>) -> bool {
    value.is_some_and(is_truthy)
}

/// Loose identifier comparison.
///
/// The config spreadsheet hands back `drone_id` as either a string or a number
/// depending on the cell format, while path parameters are always strings.
/// Strings compare exactly; numbers and booleans compare numerically.
pub fn matches_id(value: &Value, id: &str) -> bool {
    match value {
        Value::String(s) => s == id,
        Value::Number(n) => match (n.as_f64(), parse_number(id)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        Value::Bool(b) => parse_number(id) == Some(if *b { 1.0 } else { 0.0 }),
        _ => false,
    }
}

fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Deserializes a field so that an explicit `null` is kept as `Some(Value::Null)`.
///
/// Combined with `#[serde(default)]`, a missing field stays `None`. This keeps
/// "absent" and "null" apart, which plain `Option<Value>` collapses.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
