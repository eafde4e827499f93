//! Drives the fetchers over a list of identifiers.

use tootscrape_core::{Record, StatusKind};
use tootscrape_fetch::{ClientConfig, HttpClient};
use tracing::{info, instrument, warn};

use crate::api::MastodonApi;
use crate::error::ExtractError;
use crate::profile::ProfileFetcher;
use crate::statuses::StatusFetcher;

// ============================================================================
// Scrape Mode
// ============================================================================

/// What to collect for each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrapeMode {
    /// Profile record only.
    Profile,
    /// Original posts only.
    Posts,
    /// Replies only.
    Replies,
    /// Profile, posts, and replies.
    #[default]
    All,
}

impl ScrapeMode {
    /// Returns true if profile records are emitted.
    pub fn includes_profile(&self) -> bool {
        matches!(self, Self::Profile | Self::All)
    }

    /// Returns true if statuses of `kind` are fetched.
    pub fn includes(&self, kind: StatusKind) -> bool {
        match kind {
            StatusKind::Post => matches!(self, Self::Posts | Self::All),
            StatusKind::Reply => matches!(self, Self::Replies | Self::All),
        }
    }

    /// Returns true if any statuses are fetched.
    pub fn includes_statuses(&self) -> bool {
        self.includes(StatusKind::Post) || self.includes(StatusKind::Reply)
    }
}

// ============================================================================
// Scraper
// ============================================================================

/// Sequential scraper over a list of identifiers.
///
/// Inputs are processed one at a time, in order. Within an input the
/// profile is fetched first, then posts, then replies.
#[derive(Debug, Clone)]
pub struct Scraper {
    profiles: ProfileFetcher,
    statuses: StatusFetcher,
}

impl Scraper {
    /// Creates a scraper sharing one HTTP client between fetchers.
    pub fn new(client: HttpClient, api: MastodonApi) -> Self {
        Self {
            profiles: ProfileFetcher::new(client.clone(), api.clone()),
            statuses: StatusFetcher::new(client, api),
        }
    }

    /// Creates a scraper for `base_url` with a fresh HTTP client.
    pub fn from_config(base_url: &str, config: &ClientConfig) -> Result<Self, ExtractError> {
        let client = HttpClient::new(config)?;
        Ok(Self::new(client, MastodonApi::new(base_url)?))
    }

    /// Scrapes every input and returns the records in insertion order.
    ///
    /// A failure on one input is logged and the next input proceeds.
    pub async fn run<S: AsRef<str>>(
        &self,
        inputs: &[S],
        mode: ScrapeMode,
        limit: i64,
    ) -> Vec<Record> {
        let mut records = Vec::new();

        for input in inputs {
            let input = input.as_ref();
            info!(input, "Processing input");

            if let Err(e) = self.process_input(input, mode, limit, &mut records).await {
                warn!(input, error = %e, "Skipping remainder of input");
            }
        }

        info!(records = records.len(), "Scrape finished");
        records
    }

    #[instrument(skip(self, records))]
    async fn process_input(
        &self,
        input: &str,
        mode: ScrapeMode,
        limit: i64,
        records: &mut Vec<Record>,
    ) -> Result<(), ExtractError> {
        let Some(profile) = self.profiles.fetch_profile(input).await else {
            warn!(input, "No profile data found");
            return Ok(());
        };

        let account = profile.account_ref();

        if mode.includes_profile() {
            records.push(profile.into());
        }

        if !mode.includes_statuses() {
            return Ok(());
        }

        let account = account.ok_or_else(|| ExtractError::MissingAccount(input.to_string()))?;

        for kind in [StatusKind::Post, StatusKind::Reply] {
            if mode.includes(kind) {
                let statuses = self.statuses.fetch_statuses(&account, limit, kind).await;
                records.extend(statuses.into_iter().map(Record::from));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_membership() {
        assert!(ScrapeMode::Profile.includes_profile());
        assert!(!ScrapeMode::Profile.includes_statuses());
        assert!(ScrapeMode::Posts.includes(StatusKind::Post));
        assert!(!ScrapeMode::Posts.includes(StatusKind::Reply));
        assert!(!ScrapeMode::Posts.includes_profile());
        assert!(ScrapeMode::Replies.includes(StatusKind::Reply));
        assert!(!ScrapeMode::Replies.includes(StatusKind::Post));
        assert!(ScrapeMode::All.includes_profile());
        assert!(ScrapeMode::All.includes(StatusKind::Post));
        assert!(ScrapeMode::All.includes(StatusKind::Reply));
    }
}
