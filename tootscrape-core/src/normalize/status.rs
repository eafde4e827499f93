//! Status payload normalization and reply classification.

use serde_json::{Map, Value};

use super::fields::Fields;
use crate::models::{AccountRef, CanonicalStatus, MediaAttachment, StatusKind};

/// Fields that mark a status as a reply when non-null.
const REPLY_MARKERS: &[&str] = &[
    "in_reply_to_id",
    "in_reply_to_account_id",
    "inReplyToId",
    "inReplyToAccountId",
];

/// Returns true if the raw status replies to another status or account.
///
/// This is the authoritative classification; whatever filter the server
/// was asked to apply is ignored.
pub fn is_reply(raw: &Map<String, Value>) -> bool {
    Fields::new(raw).first(REPLY_MARKERS).is_some()
}

/// Maps a raw status object onto a [`CanonicalStatus`].
///
/// `account` and `kind` describe the fetch that produced the status and are
/// stamped on the record as-is.
pub fn normalize_status(
    raw: &Map<String, Value>,
    account: &AccountRef,
    kind: StatusKind,
) -> CanonicalStatus {
    let fields = Fields::new(raw);

    CanonicalStatus {
        id: fields.id(&["id"]),
        account_id: account.id.clone(),
        username: account.username.clone(),
        created_at: fields.text(&["created_at", "createdAt"]),
        url: fields.text(&["url"]),
        content: fields.text(&["content"]),
        media_attachments: media_attachments(fields),
        replies_count: fields.int(&["replies_count", "repliesCount"]),
        reblogs_count: fields.int(&["reblogs_count", "reblogsCount"]),
        favourites_count: fields.int(&[
            "favourites_count",
            "favorites_count",
            "favouritesCount",
            "favoritesCount",
        ]),
        kind,
    }
}

fn media_attachments(fields: Fields<'_>) -> Vec<MediaAttachment> {
    let Some(items) = fields
        .first(&["media_attachments", "mediaAttachments"])
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_object)
        .map(|item| {
            let item = Fields::new(item);
            MediaAttachment {
                id: item.id(&["id"]),
                media_type: item.text(&["type"]),
                url: item.text(&["url"]),
                preview_url: item.text(&["preview_url", "previewUrl"]),
            }
        })
        .collect()
}
