//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Neither `--input` nor an input file supplied an identifier.
    #[error("No input provided. Use --input or --input-file.")]
    NoInput,

    /// The input list file could not be read.
    #[error("Input file {path} could not be read: {source}")]
    InputFile {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
