use crate::constants::{DEFAULT_BASE_URL, DEFAULT_REST_TIMEOUT};
use crate::model::retry::RetryConfig;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the Cuenca API
pub struct Credentials {
    /// API key, sent as the Basic auth username
    pub api_key: String,
    /// API secret, sent as the Basic auth password
    pub api_secret: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Cuenca REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Cuenca API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Retry behavior on rate limit responses
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// Loads `.env` first if present. Credentials come from
    /// `CUENCA_API_KEY` and `CUENCA_API_SECRET`; the base URL from
    /// `CUENCA_BASE_URL` (production API when unset).
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("CUENCA_API_KEY", String::from("default_api_key"));
        let api_secret =
            get_env_or_default("CUENCA_API_SECRET", String::from("default_api_secret"));

        // Check if we are using default values
        if api_key == "default_api_key" {
            error!("CUENCA_API_KEY not found in environment variables or .env file");
        }
        if api_secret == "default_api_secret" {
            error!("CUENCA_API_SECRET not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                api_key,
                api_secret,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("CUENCA_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("CUENCA_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            retry: RetryConfig::default(),
        }
    }

    /// Creates a configuration pointing at the sandbox environment
    ///
    /// Same as [`Config::new`] but with the sandbox base URL unless
    /// `CUENCA_BASE_URL` is set explicitly.
    pub fn sandbox() -> Self {
        let mut config = Self::new();
        if std::env::var("CUENCA_BASE_URL").is_err() {
            config.rest_api.base_url = String::from(crate::constants::SANDBOX_BASE_URL);
        }
        config
    }
}
