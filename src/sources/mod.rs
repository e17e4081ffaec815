// Best-effort readers for the upstream artifacts. Each reader reports what went
// wrong; the collector decides which default stands in for it.

mod agent_state;
mod context_markers;
mod handoffs;
mod suggestions;

pub use agent_state::read_agent_state;
pub use context_markers::read_context_percentage;
pub use handoffs::read_recent_handoffs;
pub use suggestions::read_suggestion_history;

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{} does not exist", .0.display())]
    Missing(PathBuf),
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },
}

impl SourceError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            SourceError::Missing(path.to_path_buf())
        } else {
            SourceError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    fn parse(path: &Path, reason: impl std::fmt::Display) -> Self {
        SourceError::Parse {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

fn read_source(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|e| SourceError::io(path, e))
}
