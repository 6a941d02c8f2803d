//! Drone Core
//!
//! Core types shared by the drone relay crates.
//!
//! This crate contains:
//! - Domain types: records held by the upstream services (drones, log entries)
//! - DTOs: request and response bodies of the gateway API
//! - JSON helpers for working with loosely typed upstream values

pub mod domain;
pub mod dto;
pub mod json;
