//! Input list loading.

use std::path::Path;

use tracing::debug;

use crate::error::StoreError;

/// Collects identifiers from `--input` and an optional input file.
///
/// The single input comes first, followed by each non-blank line of the
/// file in order. Values are trimmed and blanks are dropped.
///
/// # Errors
///
/// Fails if the file can't be read, or if no identifier remains.
pub fn load_inputs(input: Option<&str>, input_file: Option<&Path>) -> Result<Vec<String>, StoreError> {
    let mut inputs: Vec<String> = input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .into_iter()
        .collect();

    if let Some(path) = input_file {
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::InputFile {
            path: path.to_path_buf(),
            source,
        })?;
        let lines = parse_input_list(&content);
        debug!(path = %path.display(), count = lines.len(), "Read input file");
        inputs.extend(lines);
    }

    if inputs.is_empty() {
        return Err(StoreError::NoInput);
    }
    Ok(inputs)
}

/// Splits an input list into trimmed, non-blank identifiers.
pub fn parse_input_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
