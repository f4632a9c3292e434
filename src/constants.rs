//! Global constants for the Cuenca client

/// Base URL for the production Cuenca API
pub const DEFAULT_BASE_URL: &str = "https://api.cuenca.com";

/// Base URL for the sandbox Cuenca API
pub const SANDBOX_BASE_URL: &str = "https://sandbox.cuenca.com";

/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;

/// Default delay in seconds between retries on rate limit responses
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 10;

/// Default maximum number of retries on rate limit responses
pub const DEFAULT_MAX_RETRIES: u32 = 3;
