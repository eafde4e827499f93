//! Settings management.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tootscrape_fetch::ClientConfig;
use tracing::{debug, info, warn};

use crate::error::StoreError;

/// Settings file read when no `--config` path is given.
const DEFAULT_SETTINGS_PATH: &str = "config/settings.json";

// ============================================================================
// Settings
// ============================================================================

/// Scraper settings, read from a JSON file.
///
/// Every field is optional in the file; missing fields take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Server to scrape.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout: f64,
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Base backoff delay in seconds.
    pub backoff_factor: f64,
    /// Directory for generated output files.
    pub output_dir: PathBuf,
    /// Log level.
    pub log_level: LogLevel,
}

fn default_request_timeout() -> f64 {
    15.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "https://truthsocial.com".to_string(),
            request_timeout: default_request_timeout(),
            max_retries: 3,
            backoff_factor: 0.5,
            output_dir: PathBuf::from("data"),
            log_level: LogLevel::default(),
        }
    }
}

impl Settings {
    /// Returns the default settings file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_SETTINGS_PATH)
    }

    /// Loads settings from a specific path.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one
    /// is an error.
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "Settings file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| StoreError::Config(format!("{}: {e}", path.display())))?;

        info!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Builds the HTTP client configuration.
    ///
    /// An invalid timeout falls back to the default.
    pub fn client_config(&self) -> ClientConfig {
        let timeout = Duration::try_from_secs_f64(self.request_timeout)
            .ok()
            .filter(|t| !t.is_zero())
            .unwrap_or_else(|| {
                warn!(
                    request_timeout = self.request_timeout,
                    "Invalid request timeout, using default"
                );
                Duration::from_secs_f64(default_request_timeout())
            });

        ClientConfig::new(timeout, self.max_retries, self.backoff_factor)
    }
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level.
///
/// Parsed case-insensitively, so `"INFO"` and `"warning"` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    /// Error level logging.
    Error,
    /// Warning level logging.
    Warn,
    /// Info level logging.
    #[default]
    Info,
    /// Debug level logging.
    Debug,
    /// Trace level logging.
    Trace,
}

impl LogLevel {
    /// Returns the level as a `tracing` filter directive.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter())
    }
}

impl FromStr for LogLevel {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" | "critical" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(StoreError::Config(format!("unknown log level: {other}"))),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, <Self as TryFrom<String>>::Error> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_string()
    }
}
