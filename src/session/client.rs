//! HTTP session for the Cuenca API
//!
//! This module provides the shared transport used by every resource:
//! - HTTP Basic authentication with the configured API key and secret
//! - JSON request/response handling
//! - Retry with delay on rate limit responses
//! - Mapping of HTTP statuses onto [`AppError`]

use crate::config::Config;
use crate::error::AppError;
use crate::session::resource::{Resource, ResourceClient};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

const USER_AGENT: &str = concat!("cuenca-client/", env!("CARGO_PKG_VERSION"));

/// Authenticated HTTP session for the Cuenca API
///
/// Cheap to clone; the underlying connection pool and configuration
/// are shared. There is no global default instance: construct one at
/// the application's composition root and pass it to each call site.
#[derive(Clone)]
pub struct Session {
    http_client: HttpClient,
    config: Arc<Config>,
}

impl Session {
    /// Creates a new session from the given configuration
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(Session)` - Session ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Gets the active configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Internal method to make HTTP requests
    ///
    /// Rate limit responses (429) are retried with a delay per the
    /// configured [`RetryConfig`](crate::model::retry::RetryConfig);
    /// every other non-success status maps onto an error immediately.
    async fn request_internal<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let path = path.trim_start_matches('/');
        let url = format!("{}/{}", self.config.rest_api.base_url, path);

        let max_retries = self.config.retry.max_retries();
        let delay_secs = self.config.retry.delay_secs();
        let mut retry_count = 0;

        loop {
            debug!("{} {}", method, url);

            let mut request = self
                .http_client
                .request(method.clone(), &url)
                .basic_auth(
                    &self.config.credentials.api_key,
                    Some(&self.config.credentials.api_secret),
                )
                .header("Content-Type", "application/json; charset=UTF-8")
                .header("Accept", "application/json; charset=UTF-8");

            if let Some(b) = body {
                request = request.json(b);
            }

            let response = request.send().await?;
            let status = response.status();
            debug!("Response status: {}", status);

            if status.is_success() {
                return Ok(response);
            }

            match status {
                StatusCode::TOO_MANY_REQUESTS => {
                    retry_count += 1;
                    if retry_count > max_retries {
                        error!(
                            "Rate limit exceeded after {} attempts. Max retries ({}) reached.",
                            retry_count - 1,
                            max_retries
                        );
                        return Err(AppError::RateLimitExceeded);
                    }

                    warn!(
                        "Rate limit exceeded (attempt {}). Waiting {} seconds before retry...",
                        retry_count, delay_secs
                    );
                    tokio::time::sleep(Duration::from_secs(delay_secs)).await;
                    continue; // Retry the request
                }
                StatusCode::UNAUTHORIZED => {
                    let body_text = response.text().await.unwrap_or_default();
                    error!("Unauthorized: {}", body_text);
                    return Err(AppError::Unauthorized);
                }
                _ => {
                    let body_text = response.text().await.unwrap_or_default();
                    error!("Request failed with status {}: {}", status, body_text);
                    return Err(AppError::Api {
                        status,
                        body: body_text,
                    });
                }
            }
        }
    }

    /// Parses a response into the desired type
    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ResourceClient for Session {
    async fn create<R, B>(&self, body: &B) -> Result<R, AppError>
    where
        R: Resource + Send,
        B: Serialize + Sync,
    {
        let path = format!("/{}", R::NAME);
        let response = self
            .request_internal(Method::POST, &path, Some(body))
            .await?;
        self.parse_response(response).await
    }

    async fn retrieve<R>(&self, id: &str) -> Result<R, AppError>
    where
        R: Resource + Send,
    {
        let path = format!("/{}/{}", R::NAME, id);
        let response = self
            .request_internal::<()>(Method::GET, &path, None)
            .await
            .map_err(|e| match e {
                AppError::Api { status, .. } if status == StatusCode::NOT_FOUND => {
                    AppError::NotFound {
                        resource: R::NAME,
                        id: id.to_string(),
                    }
                }
                other => other,
            })?;
        self.parse_response(response).await
    }
}
