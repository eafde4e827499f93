//! Output file persistence.
//!
//! The result document is written once, at the end of a run.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tootscrape_core::Record;
use tracing::{debug, info};

use crate::error::StoreError;

/// Returns `{output_dir}/output_{YYYYmmdd_HHMMSS}.json` for `now`.
pub fn default_output_path(output_dir: &Path, now: DateTime<Utc>) -> PathBuf {
    output_dir.join(format!("output_{}.json", now.format("%Y%m%d_%H%M%S")))
}

/// Returns the explicit output path if given, else a timestamped file in
/// `output_dir`.
pub fn resolve_output_path(explicit: Option<&Path>, output_dir: &Path) -> PathBuf {
    explicit.map_or_else(|| default_output_path(output_dir, Utc::now()), Path::to_path_buf)
}

/// Writes `records` to `path` as an indented JSON array.
///
/// Creates parent directories if they don't exist and writes atomically
/// (via temp file + rename).
pub async fn write_records(path: &Path, records: &[Record]) -> Result<(), StoreError> {
    debug!(path = %path.display(), "Saving output file");

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!(path = %parent.display(), "Creating output directory");
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let json = serde_json::to_string_pretty(records)?;

    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, &json).await?;
    tokio::fs::rename(&temp_path, path).await?;

    info!(records = records.len(), path = %path.display(), "Wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_output_path() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(
            default_output_path(Path::new("data"), now),
            PathBuf::from("data/output_20240309_070501.json")
        );
    }

    #[test]
    fn test_explicit_output_path_wins() {
        let explicit = Path::new("/tmp/out.json");
        assert_eq!(
            resolve_output_path(Some(explicit), Path::new("data")),
            PathBuf::from("/tmp/out.json")
        );

        let generated = resolve_output_path(None, Path::new("data"));
        assert!(generated.starts_with("data"));
        assert!(generated.to_string_lossy().ends_with(".json"));
    }
}
