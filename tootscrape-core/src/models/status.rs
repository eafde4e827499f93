//! Status (post/reply) records.

use serde::{Deserialize, Serialize};

// ============================================================================
// Status Kind
// ============================================================================

/// Whether a status is an original post or a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// An original post.
    Post,
    /// A reply to another status or account.
    Reply,
}

impl StatusKind {
    /// Returns the `exclude_replies` hint sent to the server for this kind.
    ///
    /// Servers don't all honor it, so results are re-filtered client-side.
    pub fn exclude_replies_hint(&self) -> bool {
        matches!(self, Self::Post)
    }

    /// Returns the label used in output and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Reply => "reply",
        }
    }

    /// Returns the plural label used in logs.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Post => "posts",
            Self::Reply => "replies",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Canonical Status
// ============================================================================

/// Normalized post or reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalStatus {
    /// Server-side status id.
    pub id: Option<String>,
    /// Id of the account the status was fetched for.
    pub account_id: String,
    /// Username of the account the status was fetched for.
    pub username: String,
    /// Creation timestamp, as sent by the server.
    pub created_at: Option<String>,
    /// Public URL of the status.
    pub url: Option<String>,
    /// Body (usually HTML).
    pub content: Option<String>,
    /// Attached media, in server order. Empty, never null.
    pub media_attachments: Vec<MediaAttachment>,
    /// Number of replies.
    pub replies_count: Option<i64>,
    /// Number of reblogs (boosts).
    pub reblogs_count: Option<i64>,
    /// Number of favourites.
    pub favourites_count: Option<i64>,
    /// Post or reply.
    #[serde(rename = "type")]
    pub kind: StatusKind,
}

/// A media item attached to a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAttachment {
    /// Attachment id.
    pub id: Option<String>,
    /// Media type (`image`, `video`, `gifv`, ...).
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    /// Full-size URL.
    pub url: Option<String>,
    /// Thumbnail URL.
    pub preview_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_hint() {
        assert!(StatusKind::Post.exclude_replies_hint());
        assert!(!StatusKind::Reply.exclude_replies_hint());
    }

    #[test]
    fn test_status_serializes_type_tag() {
        let status = CanonicalStatus {
            id: Some("1".to_string()),
            account_id: "42".to_string(),
            username: "jdoe".to_string(),
            created_at: None,
            url: None,
            content: Some("<p>hi</p>".to_string()),
            media_attachments: vec![MediaAttachment {
                id: Some("9".to_string()),
                media_type: Some("image".to_string()),
                url: None,
                preview_url: Some("https://cdn.example.com/p.png".to_string()),
            }],
            replies_count: Some(0),
            reblogs_count: None,
            favourites_count: Some(3),
            kind: StatusKind::Reply,
        };

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["type"], "reply");
        assert_eq!(json["accountId"], "42");
        assert_eq!(json["mediaAttachments"][0]["type"], "image");
        assert_eq!(
            json["mediaAttachments"][0]["previewUrl"],
            "https://cdn.example.com/p.png"
        );
        assert!(json["reblogsCount"].is_null());
    }
}
