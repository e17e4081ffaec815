use std::num::IntErrorKind;
use std::path::Path;

use super::{SourceError, read_source};

/// Highest percentage across `<dir>/<prefix>*<suffix>` markers, or 0 when none parse.
pub fn read_context_percentage(
    dir: &Path,
    prefix: &str,
    suffix: &str,
) -> Result<u32, SourceError> {
    let pattern = format!(
        "{}/{}*{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        glob::Pattern::escape(prefix),
        glob::Pattern::escape(suffix)
    );
    let paths = glob::glob(&pattern).map_err(|e| SourceError::parse(dir, e))?;
    let max = paths
        .filter_map(Result::ok)
        .filter_map(|path| match read_source(&path) {
            Ok(raw) => parse_marker(&raw),
            Err(e) => {
                tracing::trace!(error = %e, "skipping context marker");
                None
            }
        })
        .max()
        .unwrap_or(0);
    Ok(max)
}

/// A marker holds one integer, possibly with surrounding whitespace. Out-of-range
/// values are clamped to 0..=100.
pub(crate) fn parse_marker(raw: &str) -> Option<u32> {
    match raw.trim().parse::<i64>() {
        Ok(pct) => Some(pct.clamp(0, 100) as u32),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(100),
            IntErrorKind::NegOverflow => Some(0),
            _ => None,
        },
    }
}
