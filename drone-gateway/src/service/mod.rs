//! Service Module
//!
//! Business logic layer for the gateway.
//! Services validate input, call an upstream through its trait and shape the result.

pub mod drone;
pub mod log;

// Re-export for convenience
pub use drone as drone_service;
pub use log as log_service;
