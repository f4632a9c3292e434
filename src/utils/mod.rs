//! Utility helpers shared across the crate

/// Environment variable helpers
pub mod config;

/// Logging setup
pub mod logger;
