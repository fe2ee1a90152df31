//! Shared value types and the error taxonomy used by the facility service
//! and the web gateway.

pub mod errors;
pub mod models;
