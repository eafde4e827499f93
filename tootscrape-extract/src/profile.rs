//! Profile fetcher.

use serde_json::Value;
use tootscrape_core::identifier::resolve_username;
use tootscrape_core::{CanonicalProfile, normalize_profile};
use tootscrape_fetch::HttpClient;
use tracing::{error, info, instrument, warn};

use crate::api::MastodonApi;
use crate::error::ExtractError;

/// Resolves identifiers to account profiles via the lookup endpoint.
#[derive(Debug, Clone)]
pub struct ProfileFetcher {
    client: HttpClient,
    api: MastodonApi,
}

impl ProfileFetcher {
    /// Creates a new profile fetcher.
    pub fn new(client: HttpClient, api: MastodonApi) -> Self {
        Self { client, api }
    }

    /// Fetches the profile for a handle, username, or profile URL.
    ///
    /// Returns `None` when the account can't be found or fetched; the
    /// reason is logged. Never fails.
    #[instrument(skip(self))]
    pub async fn fetch_profile(&self, identifier: &str) -> Option<CanonicalProfile> {
        match self.try_fetch_profile(identifier).await {
            Ok(profile) => Some(profile),
            Err(ExtractError::Core(e)) => {
                error!(error = %e, "Could not resolve username");
                None
            }
            Err(ExtractError::Fetch(e)) => {
                error!(error = %e, "Failed to fetch profile");
                None
            }
            Err(e) => {
                warn!(error = %e, "Profile unavailable");
                None
            }
        }
    }

    /// Like [`fetch_profile`](Self::fetch_profile), but reports why no
    /// profile was produced.
    pub async fn try_fetch_profile(
        &self,
        identifier: &str,
    ) -> Result<CanonicalProfile, ExtractError> {
        let username = resolve_username(identifier)?;
        let url = self.api.lookup_url()?;
        info!(username = %username, url = %url, "Fetching profile");

        let payload = self
            .client
            .get_json(&url, &[("acct", username.clone())])
            .await?;

        let Value::Object(raw) = payload else {
            return Err(ExtractError::malformed("object", &payload));
        };

        if !raw.contains_key("username") && !raw.contains_key("acct") {
            return Err(ExtractError::NotFound(format!(
                "payload for '{username}' has no username or acct field"
            )));
        }

        Ok(normalize_profile(&raw, identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use tootscrape_fetch::ClientConfig;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher(server: &MockServer) -> ProfileFetcher {
        let client = HttpClient::new(&ClientConfig::new(Duration::from_secs(5), 0, 0.0)).unwrap();
        ProfileFetcher::new(client, MastodonApi::new(&server.uri()).unwrap())
    }

    async fn mock_lookup(server: &MockServer, acct: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/api/v1/accounts/lookup"))
            .and(query_param("acct", acct))
            .respond_with(response)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_fetch_profile_from_url_identifier() {
        let server = MockServer::start().await;
        mock_lookup(
            &server,
            "jdoe",
            ResponseTemplate::new(200).set_body_json(json!({
                "id": "42",
                "username": "jdoe",
                "followers_count": 3
            })),
        )
        .await;

        let profile = fetcher(&server)
            .fetch_profile("https://example.com/@jdoe")
            .await
            .expect("profile");
        assert_eq!(profile.input, "https://example.com/@jdoe");
        assert_eq!(profile.id.as_deref(), Some("42"));
        assert_eq!(profile.followers_count, Some(3));
    }

    #[tokio::test]
    async fn test_acct_only_payload_is_valid() {
        let server = MockServer::start().await;
        mock_lookup(
            &server,
            "jdoe",
            ResponseTemplate::new(200).set_body_json(json!({"id": "1", "acct": "jdoe"})),
        )
        .await;

        let profile = fetcher(&server).fetch_profile("@jdoe").await.expect("profile");
        assert_eq!(profile.username.as_deref(), Some("jdoe"));
    }

    #[tokio::test]
    async fn test_missing_username_is_not_found() {
        let server = MockServer::start().await;
        mock_lookup(
            &server,
            "jdoe",
            ResponseTemplate::new(200).set_body_json(json!({"id": "1", "display_name": "J"})),
        )
        .await;

        let fetcher = fetcher(&server);
        assert!(matches!(
            fetcher.try_fetch_profile("jdoe").await,
            Err(ExtractError::NotFound(_))
        ));
        assert!(fetcher.fetch_profile("jdoe").await.is_none());
    }

    #[tokio::test]
    async fn test_non_object_payload_is_not_found() {
        let server = MockServer::start().await;
        mock_lookup(
            &server,
            "jdoe",
            ResponseTemplate::new(200).set_body_json(json!([{"username": "jdoe"}])),
        )
        .await;

        let fetcher = fetcher(&server);
        assert!(matches!(
            fetcher.try_fetch_profile("jdoe").await,
            Err(ExtractError::MalformedPayload { expected: "object", found: "array" })
        ));
        assert!(fetcher.fetch_profile("jdoe").await.is_none());
    }

    #[tokio::test]
    async fn test_http_failure_is_not_found() {
        let server = MockServer::start().await;
        mock_lookup(&server, "ghost", ResponseTemplate::new(404)).await;

        assert!(fetcher(&server).fetch_profile("ghost").await.is_none());
    }

    #[tokio::test]
    async fn test_empty_identifier_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let fetcher = fetcher(&server);
        assert!(fetcher.fetch_profile("  @ ").await.is_none());
        assert!(matches!(
            fetcher.try_fetch_profile("").await,
            Err(ExtractError::Core(_))
        ));
    }
}
