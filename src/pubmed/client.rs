//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Exponential backoff retry logic for 429, 5xx and transport failures
//! - Endpoint-tagged errors

use crate::error::ApiError;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("pharma-papers/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (in milliseconds)
const BASE_DELAY_MS: u64 = 100;

/// HTTP client wrapper with retry logic
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, ApiError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ApiError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            max_retries: MAX_RETRIES,
        })
    }

    /// Create a client with the given timeout and the default User-Agent
    pub fn with_timeout(timeout: Duration) -> Result<Self, ApiError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Set the maximum number of retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Perform a single GET request and map the status to an error
    async fn try_get(&self, url: &Url, endpoint: &str) -> Result<reqwest::Response, ApiError> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::timeout(endpoint)
            } else {
                ApiError::network_error(endpoint, e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ApiError::RateLimitExceeded {
                endpoint: endpoint.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    /// Perform a GET request with retry logic and error context
    pub async fn get(&self, url: &Url, endpoint: &str) -> Result<reqwest::Response, ApiError> {
        let mut delay = BASE_DELAY_MS;
        let mut attempt = 0;

        loop {
            match self.try_get(url, endpoint).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    tracing::debug!(
                        "{} (attempt {}/{}), retrying in {}ms",
                        e,
                        attempt + 1,
                        self.max_retries + 1,
                        delay
                    );
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    delay *= 2;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Perform a GET request and return the body as text
    pub async fn get_text(&self, url: &Url, endpoint: &str) -> Result<String, ApiError> {
        let response = self.get(url, endpoint).await?;
        response.text().await.map_err(|e| {
            ApiError::invalid_response(endpoint, format!("failed to read body: {}", e))
        })
    }

    /// Perform a GET request and parse the JSON body
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &Url,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        let body = self.get_text(url, endpoint).await?;
        serde_json::from_str(&body).map_err(|e| {
            ApiError::invalid_response(endpoint, format!("failed to parse JSON: {}", e))
        })
    }
}
