// The aggregated document served on GET /api/metrics

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::{AgentRecord, HandoffRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContextUsage {
    /// Highest percentage reported by any live session (0-100).
    pub percentage: u32,
    /// No upstream writer populates this; always 0.
    pub tokens: u64,
}

/// Built fresh per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "timestamp")]
    pub generated_at: DateTime<Local>,
    pub agents: Vec<AgentRecord>,
    pub context: ContextUsage,
    pub total_tool_uses: u64,
    pub total_tokens: u64,
    /// Always empty; kept for clients that expect the key.
    pub sessions: Vec<serde_json::Value>,
    #[serde(rename = "suggestions_history")]
    pub suggestion_history: Vec<serde_json::Value>,
    pub recent_handoffs: Vec<HandoffRecord>,
}

impl Snapshot {
    /// Snapshot with every source at its default.
    pub fn empty(generated_at: DateTime<Local>) -> Self {
        Self {
            generated_at,
            agents: Vec::new(),
            context: ContextUsage::default(),
            total_tool_uses: 0,
            total_tokens: 0,
            sessions: Vec::new(),
            suggestion_history: Vec::new(),
            recent_handoffs: Vec::new(),
        }
    }
}
