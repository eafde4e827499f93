//! Account (profile) records.

use serde::{Deserialize, Serialize};

// ============================================================================
// Canonical Profile
// ============================================================================

/// Normalized account record.
///
/// Every field except `input` may be null in the output; numeric fields are
/// `None` when the server omitted them or sent something unparseable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalProfile {
    /// The identifier exactly as the caller supplied it.
    pub input: String,
    /// Server-side account id.
    pub id: Option<String>,
    /// Public profile URL.
    pub url: Option<String>,
    /// Account username.
    pub username: Option<String>,
    /// Display name.
    pub display_name: Option<String>,
    /// Bio (usually HTML).
    pub description: Option<String>,
    /// Website, either explicit or taken from the profile metadata fields.
    pub website: Option<String>,
    /// Avatar image URL.
    pub avatar: Option<String>,
    /// Header image URL.
    pub header: Option<String>,
    /// Number of followers.
    pub followers_count: Option<i64>,
    /// Number of accounts followed.
    pub following_count: Option<i64>,
    /// Number of statuses (posts and replies combined).
    pub posts_and_replies_count: Option<i64>,
    /// Account creation timestamp, as sent by the server.
    pub created_at: Option<String>,
    /// Verification flag; `None` when unknown.
    pub verified: Option<bool>,
}

impl CanonicalProfile {
    /// Returns the id/username pair needed to fetch this account's statuses.
    ///
    /// `None` if either is missing or empty.
    pub fn account_ref(&self) -> Option<AccountRef> {
        let id = self.id.as_deref().filter(|id| !id.is_empty())?;
        let username = self.username.as_deref().filter(|name| !name.is_empty())?;
        Some(AccountRef::new(id, username))
    }
}

// ============================================================================
// Account Reference
// ============================================================================

/// Identifies the account whose statuses are being fetched.
///
/// Status records are stamped with these values rather than with whatever
/// the status payload itself claims.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountRef {
    /// Server-side account id.
    pub id: String,
    /// Account username.
    pub username: String,
}

impl AccountRef {
    /// Creates a new account reference.
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}
