//! Core domain types
//!
//! These types mirror the records owned by the two upstream services. The relay
//! never persists them; it only reads, reshapes and forwards them.

pub mod drone;
pub mod log;
