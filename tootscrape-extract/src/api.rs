//! Mastodon-compatible API endpoints.

use url::Url;

use crate::error::ExtractError;

/// Endpoint builder rooted at a server's base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MastodonApi {
    base: Url,
}

impl MastodonApi {
    /// Creates an endpoint builder for `base_url`.
    ///
    /// A path prefix on the base URL (`https://host/prefix`) is kept.
    pub fn new(base_url: &str) -> Result<Self, ExtractError> {
        let base = Url::parse(base_url.trim())
            .map_err(|e| ExtractError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ExtractError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { base })
    }

    /// `GET /api/v1/accounts/lookup?acct={username}`
    pub fn lookup_url(&self) -> Result<Url, ExtractError> {
        self.endpoint(&["api", "v1", "accounts", "lookup"])
    }

    /// `GET /api/v1/accounts/{account_id}/statuses`
    pub fn statuses_url(&self, account_id: &str) -> Result<Url, ExtractError> {
        self.endpoint(&["api", "v1", "accounts", account_id, "statuses"])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ExtractError> {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| ExtractError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
