//! Resilient HTTP client.
//!
//! Issues GET requests and decodes JSON bodies, retrying with exponential
//! backoff. Each call is a single sequential request loop; there is no
//! circuit breaking, jitter, or per-host limiting.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::FetchError;
use crate::retry::{RetryStrategy, Sleeper, TokioSleeper};

/// User agent string for tootscrape.
const USER_AGENT: &str = concat!("tootscrape/", env!("CARGO_PKG_VERSION"));

/// How much of a non-success response body is logged.
const LOGGED_BODY_CHARS: usize = 500;

// ============================================================================
// Client Config
// ============================================================================

/// Settings for [`HttpClient`], supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retry behaviour.
    pub retry: RetryStrategy,
}

impl ClientConfig {
    /// Creates a new client config.
    pub fn new(timeout: Duration, max_retries: u32, backoff_factor: f64) -> Self {
        Self {
            timeout,
            retry: RetryStrategy::new(max_retries, backoff_factor),
        }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Outcome of a single attempt that did not raise.
enum Attempt {
    Payload(Value),
    /// Non-2xx response, already logged.
    BadStatus,
}

/// HTTP client with retry capabilities.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    retry: RetryStrategy,
    sleeper: Arc<dyn Sleeper>,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            inner: client,
            retry: config.retry.clone(),
            sleeper: Arc::new(TokioSleeper),
        })
    }

    /// Replaces the sleeper used between attempts.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Performs a GET request and decodes the body as JSON.
    ///
    /// Any 2xx response with a valid JSON body is returned, whatever its
    /// shape. Transport errors, undecodable bodies and non-2xx statuses are
    /// all retried.
    ///
    /// # Errors
    ///
    /// Once attempts run out, returns the last transport or JSON error
    /// seen. If every attempt failed on status code alone, returns
    /// [`FetchError::RetriesExhausted`].
    #[instrument(skip_all, fields(url = %url))]
    pub async fn get_json(&self, url: &Url, query: &[(&str, String)]) -> Result<Value, FetchError> {
        let total_attempts = self.retry.total_attempts();
        let mut delays = self.retry.delays();
        let mut last_error: Option<FetchError> = None;
        let mut attempt: u64 = 0;

        loop {
            attempt += 1;
            debug!(attempt, total_attempts, "Making GET request");

            match self.attempt(url, query).await {
                Ok(Attempt::Payload(payload)) => return Ok(payload),
                Ok(Attempt::BadStatus) => {}
                Err(e) => {
                    warn!(attempt, error = %e, "Request error");
                    last_error = Some(e);
                }
            }

            let Some(delay) = delays.next() else {
                break;
            };
            debug!(delay_secs = delay.as_secs_f64(), "Backing off before retry");
            self.sleeper.sleep(delay).await;
        }

        Err(last_error.unwrap_or_else(|| FetchError::RetriesExhausted {
            url: url.to_string(),
            max_retries: self.retry.max_retries,
        }))
    }

    async fn attempt(&self, url: &Url, query: &[(&str, String)]) -> Result<Attempt, FetchError> {
        let response = self.inner.get(url.clone()).query(query).send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            return Ok(Attempt::Payload(serde_json::from_str(&body)?));
        }

        let final_url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        warn!(
            status = status.as_u16(),
            url = %final_url,
            body = %truncate_chars(&body, LOGGED_BODY_CHARS),
            "Non-success HTTP status"
        );
        Ok(Attempt::BadStatus)
    }
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
