//! Error types for the Cuenca client
//!
//! Two error families exist: local validation errors raised while
//! building a request (always before any network call) and
//! transport/API errors raised by the session. Neither family is
//! translated on the way up; callers see the original failure.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// A caller-supplied field violates its format constraints.
    ///
    /// Raised while constructing a request payload, before the session
    /// is ever touched.
    #[error("invalid {field}: {message}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable description of the violation
        message: String,
    },

    /// The API rejected the credentials (HTTP 401)
    #[error("unauthorized: check CUENCA_API_KEY and CUENCA_API_SECRET")]
    Unauthorized,

    /// The requested record does not exist server-side (HTTP 404)
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// Resource name as it appears in the URL path
        resource: &'static str,
        /// Identifier that was requested
        id: String,
    },

    /// Rate limit exceeded and retries exhausted (HTTP 429)
    #[error("rate limit exceeded after retries")]
    RateLimitExceeded,

    /// Any other non-success response from the API
    #[error("api error {status}: {body}")]
    Api {
        /// HTTP status code returned by the server
        status: StatusCode,
        /// Raw response body, useful for diagnosing rejections
        body: String,
    },

    /// Transport-level failure (connection, TLS, timeout, decode)
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization failure
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Builds a validation error for the given field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Returns true if this is a local validation error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
