// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! tootscrape CLI - profile, post, and reply scraping for Mastodon-compatible servers.
//!
//! # Examples
//!
//! ```bash
//! # Profile, posts, and replies for one account
//! tootscrape --input @Gargron
//!
//! # Posts only, from a list of accounts
//! tootscrape --input-file accounts.txt --mode posts --limit 80
//!
//! # Explicit output file and settings
//! tootscrape -i https://mastodon.social/@Gargron -o out.json -c settings.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tootscrape_extract::{ScrapeMode, Scraper};
use tootscrape_store::{LogLevel, Settings, load_inputs, resolve_output_path, write_records};

// ============================================================================
// CLI Definition
// ============================================================================

/// tootscrape CLI - Mastodon-compatible profile and status scraper.
#[derive(Debug, Parser)]
#[command(name = "tootscrape")]
#[command(about = "Scrape profiles, posts, and replies from a Mastodon-compatible server")]
#[command(long_about = r#"
tootscrape looks up each input account and writes a JSON array of
profile and status records.

Inputs may be a bare username, an @handle, or a profile URL:
  Gargron
  @Gargron
  https://mastodon.social/@Gargron

Examples:
  tootscrape -i @Gargron                     # Profile, posts, and replies
  tootscrape -f accounts.txt -m posts        # Posts for every listed account
  tootscrape -i Gargron -m profile -o p.json # Profile only, explicit output
"#)]
#[command(version)]
pub struct Cli {
    /// Single profile identifier (username, @handle, or profile URL).
    #[arg(long, short = 'i')]
    pub input: Option<String>,

    /// File with one identifier per line.
    #[arg(long, short = 'f')]
    pub input_file: Option<PathBuf>,

    /// What to collect for each input.
    #[arg(long, short = 'm', value_enum, default_value_t = ModeArg::All)]
    pub mode: ModeArg,

    /// Maximum statuses per request (clamped to 1..=80).
    #[arg(long, short = 'l', default_value_t = 40, allow_negative_numbers = true)]
    pub limit: i64,

    /// Output file path. Defaults to a timestamped file in the output directory.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Settings file path.
    #[arg(long, short = 'c', default_value_os_t = Settings::default_path())]
    pub config: PathBuf,

    /// Verbose output (show debug info).
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Quiet mode (no logging).
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Scrape mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ModeArg {
    /// Profile record only.
    Profile,
    /// Original posts only.
    Posts,
    /// Replies only.
    Replies,
    /// Profile, posts, and replies.
    #[default]
    All,
}

impl From<ModeArg> for ScrapeMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Profile => ScrapeMode::Profile,
            ModeArg::Posts => ScrapeMode::Posts,
            ModeArg::Replies => ScrapeMode::Replies,
            ModeArg::All => ScrapeMode::All,
        }
    }
}

/// CLI exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success, including runs that collected nothing.
    Success = 0,
    /// Fatal error.
    Error = 1,
}

// ============================================================================
// Logging Setup
// ============================================================================

/// Targets that receive the configured level. Everything else logs at warn.
const LOG_TARGETS: &[&str] = &[
    "tootscrape",
    "tootscrape_core",
    "tootscrape_fetch",
    "tootscrape_extract",
    "tootscrape_store",
];

fn filter_directive(level: LogLevel, verbose: bool) -> String {
    let level = if verbose { LogLevel::Debug } else { level };
    std::iter::once("warn".to_string())
        .chain(LOG_TARGETS.iter().map(|target| format!("{target}={}", level.as_filter())))
        .collect::<Vec<_>>()
        .join(",")
}

fn setup_logging(level: LogLevel, verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level, verbose)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let settings = match Settings::load_from(&cli.config) {
        Ok(settings) => settings,
        Err(e) => {
            setup_logging(LogLevel::default(), cli.verbose, cli.quiet);
            error!(error = %e, "Failed to load settings");
            std::process::exit(ExitCode::Error as i32);
        }
    };

    setup_logging(settings.log_level, cli.verbose, cli.quiet);

    let code = match run(&cli, &settings).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::Error
        }
    };

    std::process::exit(code as i32);
}

/// Runs one scrape and writes the result file.
async fn run(cli: &Cli, settings: &Settings) -> Result<ExitCode> {
    let inputs = load_inputs(cli.input.as_deref(), cli.input_file.as_deref())?;
    debug!(count = inputs.len(), base_url = %settings.base_url, "Loaded inputs");

    let scraper = Scraper::from_config(&settings.base_url, &settings.client_config())
        .context("Failed to set up scraper")?;

    let records = scraper.run(&inputs, cli.mode.into(), cli.limit).await;
    if records.is_empty() {
        warn!("No records collected; nothing written");
        return Ok(ExitCode::Success);
    }

    let path = resolve_output_path(cli.output.as_deref(), &settings.output_dir);
    write_records(&path, &records)
        .await
        .with_context(|| format!("Failed to write output to {}", path.display()))?;

    info!(records = records.len(), "Done");
    Ok(ExitCode::Success)
}
