//! Data Transfer Objects for the gateway API
//!
//! Request and response bodies exchanged with API callers and, for log
//! creation, forwarded to the log store.

pub mod drone;
pub mod log;

use serde::{Deserialize, Serialize};

/// Body of the `/api/hello` liveness greeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hello {
    pub name: String,
}

impl Default for Hello {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
        }
    }
}
