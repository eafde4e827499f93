//! Identifier normalization.
//!
//! Users may name an account as `@handle`, as a bare `handle`, or by pasting
//! a profile URL (`https://host/@handle`, `https://host/users/handle`). All
//! of these resolve to the same canonical username.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// First `@name` segment anywhere in a URL path.
static HANDLE_IN_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([^/]+)").expect("Invalid regex"));

/// Converts a handle, bare username, or profile URL into a username.
///
/// Rules, first match wins:
///
/// 1. Surrounding whitespace is trimmed.
/// 2. A leading `@` is stripped (once) and the remainder returned.
/// 3. For `http://` / `https://` input, the first `@name` segment of the
///    path is returned, else the last non-empty path segment.
/// 4. Anything else is returned as-is.
///
/// Never fails: input that matches no rule comes back trimmed but otherwise
/// unchanged. An empty result means nothing usable was supplied.
pub fn normalize_identifier(identifier: &str) -> String {
    let identifier = identifier.trim();

    if let Some(rest) = identifier.strip_prefix('@') {
        return rest.to_string();
    }

    if identifier.starts_with("http://") || identifier.starts_with("https://") {
        if let Some(username) = username_from_url(identifier) {
            return username;
        }
    }

    identifier.to_string()
}

/// Like [`normalize_identifier`], but rejects identifiers that resolve to
/// an empty username.
pub fn resolve_username(identifier: &str) -> Result<String, CoreError> {
    let username = normalize_identifier(identifier);
    if username.is_empty() {
        return Err(CoreError::InvalidIdentifier(identifier.to_string()));
    }
    Ok(username)
}

fn username_from_url(raw: &str) -> Option<String> {
    let path = url_path(raw);

    if let Some(caps) = HANDLE_IN_PATH_RE.captures(path) {
        return Some(caps[1].to_string());
    }

    path.split('/')
        .rfind(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Path of an `http(s)://` URL, taken verbatim from the raw text.
///
/// No percent-encoding is applied and the authority is not validated.
fn url_path(raw: &str) -> &str {
    let Some((_, rest)) = raw.split_once("://") else {
        return "";
    };
    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    rest.find('/').map_or("", |start| &rest[start..])
}
