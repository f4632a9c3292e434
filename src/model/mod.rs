//! Data model for the Cuenca API

/// CURP validation record and operations
pub mod curp_validation;

/// Identity field types (CURP, country, state, gender)
pub mod identity;

/// Request payload types
pub mod requests;

/// Retry configuration for rate limited requests
pub mod retry;
