//! Networking modules for the rental REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and `types` defines the DTOs they exchange.

pub mod api;
pub mod types;
