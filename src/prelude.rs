//! # Cuenca Client Prelude
//!
//! This module provides a convenient way to import the most commonly
//! used types and traits from the library.
//!
//! ## Usage
//!
//! ```rust
//! use cuenca_client::prelude::*;
//!
//! let config = Config::new();
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Cuenca API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION AND RESOURCE CLIENT
// ============================================================================

/// Authenticated HTTP session
pub use crate::session::client::Session;

/// Resource trait and create/retrieve primitives
pub use crate::session::resource::{Resource, ResourceClient};

// ============================================================================
// CURP VALIDATION MODELS
// ============================================================================

/// CURP validation record
pub use crate::model::curp_validation::CurpValidation;

/// CURP validation request payload
pub use crate::model::requests::CurpValidationRequest;

/// Identity field types
pub use crate::model::identity::{Country, Curp, Gender, State};

/// Retry configuration
pub use crate::model::retry::RetryConfig;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Environment variable helpers
pub use crate::utils::config::{get_env_or_default, get_env_or_none};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, NaiveDate, Utc};
