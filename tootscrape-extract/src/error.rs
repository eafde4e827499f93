//! Extraction errors.
//!
//! None of these escape a fetcher: [`crate::ProfileFetcher`] and
//! [`crate::StatusFetcher`] log them and degrade to an absent or empty
//! result. They are public so the `try_*` variants can be tested and
//! reused.

use serde_json::Value;
use thiserror::Error;
use tootscrape_core::CoreError;
use tootscrape_fetch::FetchError;

/// Errors raised while extracting records for one account.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The request failed after all retries.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The identifier did not resolve to a username.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The server returned an account payload without a username.
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// The payload had the wrong JSON shape.
    #[error("Unexpected payload type: expected {expected}, got {found}")]
    MalformedPayload {
        /// Shape that was required.
        expected: &'static str,
        /// Shape that was received.
        found: &'static str,
    },

    /// The configured base URL cannot carry API paths.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The resolved profile lacks the id or username needed for statuses.
    #[error("Account ID or username missing for input {0}")]
    MissingAccount(String),
}

impl ExtractError {
    /// Builds a [`ExtractError::MalformedPayload`] for `payload`.
    pub(crate) fn malformed(expected: &'static str, payload: &Value) -> Self {
        Self::MalformedPayload {
            expected,
            found: json_type(payload),
        }
    }
}

/// Name of a JSON value's type, for logs.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
