// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `tootscrape` Core
//!
//! Core types and pure normalization logic for the `tootscrape` scraper.
//!
//! This crate provides the foundational pieces used across all other
//! `tootscrape` crates:
//!
//! - Canonical record types written to the output document
//! - The identifier normalizer (handle / username / profile URL)
//! - The field normalizer that maps server-specific JSON shapes onto the
//!   canonical schema
//!
//! Nothing in this crate performs I/O.
//!
//! ## Key Types
//!
//! ### Records
//! - [`CanonicalProfile`] - Normalized account record
//! - [`CanonicalStatus`] - Normalized post or reply
//! - [`MediaAttachment`] - Media item attached to a status
//! - [`StatusKind`] - `post` or `reply`
//! - [`Record`] - One entry of the output array
//!
//! ### Normalization
//! - [`identifier::normalize_identifier`] - Canonical username from user input
//! - [`normalize::normalize_profile`] - Raw account payload to [`CanonicalProfile`]
//! - [`normalize::normalize_status`] - Raw status payload to [`CanonicalStatus`]
//! - [`normalize::is_reply`] - Reply classification

pub mod error;
pub mod identifier;
pub mod models;
pub mod normalize;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    AccountRef, CanonicalProfile, CanonicalStatus, MediaAttachment, Record, StatusKind,
};

pub use identifier::normalize_identifier;
pub use normalize::{is_reply, normalize_profile, normalize_status};
