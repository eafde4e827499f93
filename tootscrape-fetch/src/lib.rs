// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `tootscrape` Fetch
//!
//! Retrying HTTP client for the `tootscrape` scraper.
//!
//! - [`client::HttpClient`] - GET + JSON decode with bounded retry
//! - [`retry::RetryStrategy`] - Attempt count and exponential backoff
//! - [`retry::Sleeper`] - Seam for the backoff wait
//! - [`error::FetchError`] - What a failed fetch surfaces
//!
//! ## Example
//!
//! ```ignore
//! use std::time::Duration;
//! use tootscrape_fetch::{ClientConfig, HttpClient};
//!
//! let client = HttpClient::new(&ClientConfig::new(Duration::from_secs(15), 3, 0.5))?;
//! let url = url::Url::parse("https://example.com/api/v1/accounts/lookup")?;
//! let payload = client.get_json(&url, &[("acct", "jdoe".to_string())]).await?;
//! ```

pub mod client;
pub mod error;
pub mod retry;

// Re-export key types at crate root
pub use client::{ClientConfig, HttpClient};
pub use error::FetchError;
pub use retry::{RetryStrategy, Sleeper, TokioSleeper};
