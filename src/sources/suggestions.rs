use std::path::Path;

use super::{SourceError, read_source};

/// The last `limit` entries of the suggestion log, oldest first. Entries are opaque.
pub fn read_suggestion_history(
    path: &Path,
    limit: usize,
) -> Result<Vec<serde_json::Value>, SourceError> {
    let raw = read_source(path)?;
    let mut entries: Vec<serde_json::Value> =
        serde_json::from_str(&raw).map_err(|e| SourceError::parse(path, e))?;
    let skip = entries.len().saturating_sub(limit);
    entries.drain(..skip);
    Ok(entries)
}
