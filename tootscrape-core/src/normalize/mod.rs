//! Field normalization.
//!
//! Pure functions mapping raw server payloads onto the canonical record
//! types. Servers disagree on field spelling (`followers_count` vs
//! `followersCount`, `favourites_count` vs `favorites_count`), so each
//! canonical field is resolved from an ordered list of source names; the
//! first non-null source wins.
//!
//! Nothing here fails. Missing or malformed fields become `None` (or an
//! empty list for media attachments).

mod fields;
mod profile;
mod status;

pub use fields::{lenient_bool, lenient_int};
pub use profile::normalize_profile;
pub use status::{is_reply, normalize_status};
