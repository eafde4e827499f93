//! Account payload normalization.

use serde_json::{Map, Value};

use super::fields::{Fields, as_text};
use crate::models::CanonicalProfile;

/// Metadata field names that are read as a website.
const WEBSITE_FIELD_NAMES: &[&str] = &["website", "site", "url"];

/// Maps a raw account object onto a [`CanonicalProfile`].
///
/// `input` is the identifier the caller originally supplied and is copied
/// through unchanged.
pub fn normalize_profile(raw: &Map<String, Value>, input: &str) -> CanonicalProfile {
    let fields = Fields::new(raw);

    CanonicalProfile {
        input: input.to_string(),
        id: fields.id(&["id"]),
        url: fields.text(&["url", "profile_url"]),
        username: fields.text(&["username", "acct"]),
        display_name: fields.text(&["display_name", "displayName"]),
        description: fields.text(&["note", "description"]),
        website: website(fields),
        avatar: fields.text(&["avatar"]),
        header: fields.text(&["header"]),
        followers_count: fields.int(&["followers_count", "followersCount"]),
        following_count: fields.int(&["following_count", "followingCount"]),
        posts_and_replies_count: fields.int(&["statuses_count", "postsAndRepliesCount"]),
        created_at: fields.text(&["created_at", "createdAt"]),
        verified: fields.flag(&["verified"]),
    }
}

/// Direct `website` field, else the first `fields` entry named like one.
fn website(fields: Fields<'_>) -> Option<String> {
    if let Some(direct) = fields.first(&["website"]) {
        return as_text(direct);
    }

    let entries = fields.first(&["fields"])?.as_array()?;
    entries
        .iter()
        .filter_map(Value::as_object)
        .find(|entry| {
            entry
                .get("name")
                .and_then(Value::as_str)
                .is_some_and(|name| {
                    WEBSITE_FIELD_NAMES.contains(&name.trim().to_lowercase().as_str())
                })
        })
        .and_then(|entry| entry.get("value"))
        .and_then(as_text)
}
