//! Fetch error types.

use thiserror::Error;

/// Error type for fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response whose body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Every attempt got a non-success status and none raised an error.
    #[error("Failed to fetch data from {url} after {max_retries} retries")]
    RetriesExhausted {
        /// The requested URL.
        url: String,
        /// Configured retry count.
        max_retries: u32,
    },
}

impl FetchError {
    /// Returns true if another attempt might succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::Http(_) | FetchError::Json(_))
    }
}
