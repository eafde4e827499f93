// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # tootscrape Store
//!
//! Local file handling for tootscrape.
//!
//! This crate provides:
//!
//! - **Settings**: `config/settings.json` with defaults for every key
//! - **Inputs**: identifier lists from `--input` and `--input-file`
//! - **Persistence**: the timestamped JSON output document
//!
//! ## Usage
//!
//! ```ignore
//! use tootscrape_store::{Settings, load_inputs, resolve_output_path, write_records};
//!
//! let settings = Settings::load_from(&Settings::default_path())?;
//! let inputs = load_inputs(Some("@alice"), None)?;
//! let path = resolve_output_path(None, &settings.output_dir);
//! write_records(&path, &records).await?;
//! ```

pub mod config;
pub mod error;
pub mod inputs;
pub mod persistence;

pub use config::{LogLevel, Settings};
pub use error::StoreError;
pub use inputs::{load_inputs, parse_input_list};
pub use persistence::{default_output_path, resolve_output_path, write_records};
