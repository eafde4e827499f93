//! Core error types for `tootscrape`.

use thiserror::Error;

/// Core error type for `tootscrape` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The identifier could not be resolved to a username.
    #[error("Could not resolve username from identifier: {0:?}")]
    InvalidIdentifier(String),
}
