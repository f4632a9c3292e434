//! # Cuenca Client
//!
//! Typed Rust client for the CURP validation resource of the Cuenca
//! API. It validates identity fields locally, builds the request
//! payload, and issues create/retrieve round trips through a shared
//! HTTP session.
//!
//! # Example
//! ```ignore
//! use cuenca_client::prelude::*;
//! use chrono::NaiveDate;
//!
//! let session = Session::new(Config::new())?;
//!
//! let request = CurpValidationRequest::new(
//!     "Guillermo",
//!     "Gonzales",
//!     NaiveDate::from_ymd_opt(1965, 4, 18).unwrap(),
//!     Country::parse("MX")?,
//!     State::Veracruz,
//!     Gender::Male,
//! )
//! .with_second_surname("Camarena");
//!
//! let validation = CurpValidation::create(&session, &request).await?;
//! assert!(validation.renapo_curp_match);
//!
//! // Re-fetch later by id
//! let same = CurpValidation::retrieve(&session, &validation.id).await?;
//! ```

/// Client configuration loaded from the environment
pub mod config;

/// Global constants
pub mod constants;

/// Error types
pub mod error;

/// Data model: records, requests, and identity field types
pub mod model;

/// Commonly used types and traits
pub mod prelude;

/// HTTP session and generic resource client
pub mod session;

/// Utility helpers
pub mod utils;

/// Library version, taken from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
