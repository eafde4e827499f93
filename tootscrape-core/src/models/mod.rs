//! Canonical record types for `tootscrape`.
//!
//! These are the shapes written to the output document. Field names
//! serialize in camelCase regardless of how the upstream server spelled
//! them.
//!
//! ## Submodules
//!
//! - [`profile`] - Account records
//! - [`status`] - Post/reply records and media attachments
//! - [`record`] - The mixed output entry

mod profile;
mod record;
mod status;

pub use profile::{AccountRef, CanonicalProfile};
pub use record::Record;
pub use status::{CanonicalStatus, MediaAttachment, StatusKind};
