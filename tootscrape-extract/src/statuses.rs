//! Status fetcher, shared by posts and replies.
//!
//! Both kinds come from the same statuses endpoint. The `exclude_replies`
//! hint is sent, but not all servers honor it, so every item is classified
//! again client-side and only the requested kind is kept. A server that
//! does honor the hint may therefore yield fewer items than `limit`.

use serde_json::Value;
use tootscrape_core::{AccountRef, CanonicalStatus, StatusKind, is_reply, normalize_status};
use tootscrape_fetch::HttpClient;
use tracing::{debug, error, info, instrument, warn};

use crate::api::MastodonApi;
use crate::error::ExtractError;

/// Smallest page size requested from the server.
pub const MIN_LIMIT: i64 = 1;

/// Largest page size requested from the server.
pub const MAX_LIMIT: i64 = 80;

/// Clamps a caller-supplied limit into `MIN_LIMIT..=MAX_LIMIT`.
pub fn clamp_limit(limit: i64) -> i64 {
    limit.clamp(MIN_LIMIT, MAX_LIMIT)
}

/// Fetches one page of an account's statuses and keeps a single kind.
#[derive(Debug, Clone)]
pub struct StatusFetcher {
    client: HttpClient,
    api: MastodonApi,
}

impl StatusFetcher {
    /// Creates a new status fetcher.
    pub fn new(client: HttpClient, api: MastodonApi) -> Self {
        Self { client, api }
    }

    /// Fetches original posts for `account`.
    pub async fn fetch_posts(&self, account: &AccountRef, limit: i64) -> Vec<CanonicalStatus> {
        self.fetch_statuses(account, limit, StatusKind::Post).await
    }

    /// Fetches replies made by `account`.
    pub async fn fetch_replies(&self, account: &AccountRef, limit: i64) -> Vec<CanonicalStatus> {
        self.fetch_statuses(account, limit, StatusKind::Reply).await
    }

    /// Fetches up to `limit` statuses and keeps those of `kind`, in server
    /// order.
    ///
    /// Returns an empty list on any failure; the reason is logged. Never
    /// fails.
    #[instrument(skip(self, account, kind), fields(account_id = %account.id, kind = %kind))]
    pub async fn fetch_statuses(
        &self,
        account: &AccountRef,
        limit: i64,
        kind: StatusKind,
    ) -> Vec<CanonicalStatus> {
        match self.try_fetch_statuses(account, limit, kind).await {
            Ok(statuses) => statuses,
            Err(e @ ExtractError::MalformedPayload { .. }) => {
                warn!(error = %e, "Unexpected {} payload", kind.plural());
                Vec::new()
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch {}", kind.plural());
                Vec::new()
            }
        }
    }

    /// Like [`fetch_statuses`](Self::fetch_statuses), but reports why
    /// nothing was produced.
    pub async fn try_fetch_statuses(
        &self,
        account: &AccountRef,
        limit: i64,
        kind: StatusKind,
    ) -> Result<Vec<CanonicalStatus>, ExtractError> {
        let limit = clamp_limit(limit);
        let url = self.api.statuses_url(&account.id)?;
        info!(limit, url = %url, "Fetching {}", kind.plural());

        let query = [
            ("limit", limit.to_string()),
            ("exclude_replies", kind.exclude_replies_hint().to_string()),
        ];
        let payload = self.client.get_json(&url, &query).await?;

        let Value::Array(items) = payload else {
            return Err(ExtractError::malformed("array", &payload));
        };

        let received = items.len();
        let statuses: Vec<CanonicalStatus> = items
            .iter()
            .filter_map(Value::as_object)
            .filter(|raw| matches_kind(is_reply(raw), kind))
            .map(|raw| normalize_status(raw, account, kind))
            .collect();

        debug!(received, kept = statuses.len(), "Filtered {}", kind.plural());
        Ok(statuses)
    }
}

fn matches_kind(reply: bool, kind: StatusKind) -> bool {
    match kind {
        StatusKind::Post => !reply,
        StatusKind::Reply => reply,
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

    fn fetcher(server: &MockServer) -> StatusFetcher {
        let client = HttpClient::new(&ClientConfig::new(Duration::from_secs(5), 0, 0.0)).unwrap();
        StatusFetcher::new(client, MastodonApi::new(&server.uri()).unwrap())
    }

    fn account() -> AccountRef {
        AccountRef::new("42", "acct1")
    }

    fn mixed_page() -> Value {
        json!([
            {"id": "1", "in_reply_to_id": null, "in_reply_to_account_id": null, "content": "a"},
            {"id": "2", "in_reply_to_id": "77", "in_reply_to_account_id": "8", "content": "b"},
            "not a status",
            {"id": "3", "content": "c"},
            {"id": "4", "in_reply_to_id": null, "in_reply_to_account_id": "9", "content": "d"}
        ])
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(-5), 1);
        assert_eq!(clamp_limit(0), 1);
        assert_eq!(clamp_limit(40), 40);
        assert_eq!(clamp_limit(500), 80);
        assert_eq!(clamp_limit(i64::MIN), 1);
        assert_eq!(clamp_limit(i64::MAX), 80);
    }

    #[tokio::test]
    async fn test_requested_limit_is_clamped() {
        for (requested, sent) in [(-5, "1"), (0, "1"), (500, "80"), (40, "40")] {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/api/v1/accounts/42/statuses"))
                .and(query_param("limit", sent))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
                .expect(1)
                .mount(&server)
                .await;

            let result = fetcher(&server)
                .try_fetch_statuses(&account(), requested, StatusKind::Post)
                .await;
            assert!(result.unwrap().is_empty(), "Failed for limit {requested}");
        }
    }

    #[tokio::test]
    async fn test_posts_filtered_client_side() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/accounts/42/statuses"))
            .and(query_param("exclude_replies", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mixed_page()))
            .mount(&server)
            .await;

        let posts = fetcher(&server).fetch_posts(&account(), 40).await;
        let ids: Vec<_> = posts.iter().map(|s| s.id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(posts.iter().all(|s| s.kind == StatusKind::Post));
        assert!(posts.iter().all(|s| s.account_id == "42" && s.username == "acct1"));
    }

    #[tokio::test]
    async fn test_replies_filtered_client_side() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/accounts/42/statuses"))
            .and(query_param("exclude_replies", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mixed_page()))
            .mount(&server)
            .await;

        let replies = fetcher(&server).fetch_replies(&account(), 40).await;
        let ids: Vec<_> = replies.iter().map(|s| s.id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["2", "4"]);
        assert!(replies.iter().all(|s| s.kind == StatusKind::Reply));
    }

    #[tokio::test]
    async fn test_non_array_payload_yields_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "Record not found"})))
            .mount(&server)
            .await;

        let fetcher = fetcher(&server);
        assert!(matches!(
            fetcher.try_fetch_statuses(&account(), 40, StatusKind::Post).await,
            Err(ExtractError::MalformedPayload { expected: "array", found: "object" })
        ));
        assert!(fetcher.fetch_posts(&account(), 40).await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(fetcher(&server).fetch_replies(&account(), 40).await.is_empty());
    }
}
