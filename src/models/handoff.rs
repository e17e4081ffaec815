// Handoff document metadata

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A markdown handoff found under `<handoffs_dir>/<session>/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffRecord {
    pub name: String,
    pub session: String,
    pub modified: DateTime<Local>,
    pub size: u64,
}
