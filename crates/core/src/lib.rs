//! Shared domain types for the ML model registry.

pub mod error;
pub mod status;
pub mod types;
