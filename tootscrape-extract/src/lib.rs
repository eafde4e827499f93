// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `tootscrape` Extract
//!
//! Profile and status extraction against Mastodon-compatible servers.
//!
//! - [`api::MastodonApi`] - Endpoint URLs under a base URL
//! - [`profile::ProfileFetcher`] - Identifier to [`CanonicalProfile`](tootscrape_core::CanonicalProfile)
//! - [`statuses::StatusFetcher`] - Account to posts or replies
//! - [`scraper::Scraper`] - Runs both over a list of inputs
//!
//! Fetchers never fail: errors are logged and turned into an absent
//! profile or an empty status list.
//!
//! ## Usage
//!
//! ```ignore
//! use std::time::Duration;
//! use tootscrape_extract::{ScrapeMode, Scraper};
//! use tootscrape_fetch::ClientConfig;
//!
//! let config = ClientConfig::new(Duration::from_secs(15), 3, 0.5);
//! let scraper = Scraper::from_config("https://mastodon.social", &config)?;
//! let records = scraper.run(&["@Gargron"], ScrapeMode::All, 40).await;
//! ```

pub mod api;
pub mod error;
pub mod profile;
pub mod scraper;
pub mod statuses;

pub use api::MastodonApi;
pub use error::ExtractError;
pub use profile::ProfileFetcher;
pub use scraper::{ScrapeMode, Scraper};
pub use statuses::{MAX_LIMIT, MIN_LIMIT, StatusFetcher, clamp_limit};
