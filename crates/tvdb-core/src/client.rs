//! HTTP client with bounded retries for TheTVDB
//!
//! This module provides the HTTP layer used by every operation of the
//! library: a thin wrapper around `reqwest` that retries failed GET
//! requests a bounded number of times with a fixed delay between attempts.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::{Result, TvdbError};

/// Base URL of the legacy TheTVDB XML service
pub const DEFAULT_BASE_URL: &str = "http://thetvdb.com";

/// Default User-Agent sent with every request
const DEFAULT_USER_AGENT: &str = concat!("tvdb-core/", env!("CARGO_PKG_VERSION"));

/// Default number of retries after the first failed attempt
pub const DEFAULT_MAX_RETRIES: u32 = 10;

/// Default delay between retry attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Configuration for the TheTVDB HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service (default: `http://thetvdb.com`)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Number of retries after the first failed attempt (default: 10)
    pub max_retries: u32,
    /// Fixed delay between retry attempts (default: 1 second)
    pub retry_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

/// HTTP client for TheTVDB with fixed-interval retry logic
///
/// An attempt counts as failed on a transport error, a non-success
/// status code, or a success status carrying an empty body (the legacy
/// service's habitual failure mode). Each failed attempt is logged as
/// a warning; after `max_retries` retries the request fails fatally.
#[derive(Debug)]
pub struct TvdbClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Client configuration
    config: ClientConfig,
}

impl TvdbClient {
    /// Create a new client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Retry budget this client was configured with.
    pub fn max_retries(&self) -> u32 {
        self.config.max_retries
    }

    /// Fetch a URL, retrying failed attempts.
    ///
    /// Makes up to `max_retries + 1` attempts, sleeping `retry_delay`
    /// between them. Per-attempt failures are logged as warnings and
    /// otherwise swallowed.
    ///
    /// # Arguments
    /// * `url` - Absolute URL to fetch
    ///
    /// # Returns
    /// The response body as a string
    ///
    /// # Errors
    /// `TvdbError::RetriesExhausted` naming the URL and the retry
    /// budget once all attempts have failed.
    pub async fn get(&self, url: &str) -> Result<String> {
        let mut attempt = 0u32;
        loop {
            match self.get_once(url).await {
                Ok(body) => return Ok(body),
                Err(err) => {
                    if attempt >= self.config.max_retries {
                        return Err(TvdbError::RetriesExhausted {
                            url: url.to_string(),
                            retries: self.config.max_retries,
                        });
                    }
                    warn!(
                        url = %url,
                        attempt = attempt + 1,
                        error = %err,
                        "request failed, retrying"
                    );
                    sleep(self.config.retry_delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Fetch a URL in a single attempt, without retries.
    ///
    /// Used for the mirror directory, which the service contract
    /// fetches exactly once and un-retried.
    ///
    /// # Errors
    /// - `TvdbError::Http` - transport error or non-success status
    /// - `TvdbError::EmptyResponse` - success status with an empty body
    pub async fn get_once(&self, url: &str) -> Result<String> {
        debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        if body.trim().is_empty() {
            return Err(TvdbError::EmptyResponse(url.to_string()));
        }

        Ok(body)
    }
}
