use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::path::Path;
use std::time::SystemTime;

use super::SourceError;
use crate::models::HandoffRecord;

/// Ordering key: newest first, then session and name ascending so equal mtimes
/// come out in a stable order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Ranked {
    modified: SystemTime,
    session: Reverse<String>,
    name: Reverse<String>,
    size: u64,
}

/// The `limit` most recently modified `<root>/<session>/*.md` documents, newest first.
///
/// Keeps a bounded min-heap while walking so memory stays at `limit` entries no
/// matter how many sessions exist. Unreadable session dirs and files are skipped.
pub fn read_recent_handoffs(root: &Path, limit: usize) -> Result<Vec<HandoffRecord>, SourceError> {
    let sessions = std::fs::read_dir(root).map_err(|e| SourceError::io(root, e))?;
    if limit == 0 {
        return Ok(Vec::new());
    }
    let mut top: BinaryHeap<Reverse<Ranked>> = BinaryHeap::with_capacity(limit + 1);

    for session_dir in sessions.filter_map(Result::ok) {
        let session_path = session_dir.path();
        if !session_path.is_dir() {
            continue;
        }
        let session = session_dir.file_name().to_string_lossy().into_owned();
        let docs = match std::fs::read_dir(&session_path) {
            Ok(docs) => docs,
            Err(e) => {
                tracing::trace!(session = %session, error = %e, "skipping handoff session");
                continue;
            }
        };
        for doc in docs.filter_map(Result::ok) {
            let path = doc.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                continue;
            }
            let Ok(meta) = std::fs::metadata(&path) else {
                continue;
            };
            if !meta.is_file() {
                continue;
            }
            let Ok(modified) = meta.modified() else {
                continue;
            };
            top.push(Reverse(Ranked {
                modified,
                session: Reverse(session.clone()),
                name: Reverse(doc.file_name().to_string_lossy().into_owned()),
                size: meta.len(),
            }));
            if top.len() > limit {
                top.pop();
            }
        }
    }

    Ok(top
        .into_sorted_vec()
        .into_iter()
        .map(|Reverse(r)| HandoffRecord {
            name: r.name.0,
            session: r.session.0,
            modified: r.modified.into(),
            size: r.size,
        })
        .collect())
}
