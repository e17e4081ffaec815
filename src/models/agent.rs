// Agent records as written by the upstream agent tracker

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Agent lifecycle state. Open-ended: unrecognised values are kept verbatim so a
/// newer tracker can introduce states without breaking the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AgentStatus {
    Running,
    Completed,
    Failed,
    Other(String),
}

impl AgentStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "running" => AgentStatus::Running,
            "completed" => AgentStatus::Completed,
            "failed" => AgentStatus::Failed,
            other => AgentStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AgentStatus::Running => "running",
            AgentStatus::Completed => "completed",
            AgentStatus::Failed => "failed",
            AgentStatus::Other(s) => s,
        }
    }
}

impl Default for AgentStatus {
    fn default() -> Self {
        AgentStatus::Other("unknown".into())
    }
}

impl From<String> for AgentStatus {
    fn from(s: String) -> Self {
        match AgentStatus::parse(&s) {
            AgentStatus::Other(_) => AgentStatus::Other(s),
            known => known,
        }
    }
}

impl From<AgentStatus> for String {
    fn from(status: AgentStatus) -> Self {
        match status {
            AgentStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// One tracked agent. Field order is the wire order.
///
/// Each field is read on its own: a value of the wrong type falls back to that
/// field's default instead of rejecting the record. Keys this struct does not
/// name are carried through in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AgentRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub status: AgentStatus,
    #[serde(default, deserialize_with = "lenient_count")]
    pub tool_uses: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub tokens_used: u64,
    /// e.g. "RED", "GREEN", "REFACTOR" while an agent runs a TDD loop.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub current_phase: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<u64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Totals and agents pulled from the agent-state document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgentState {
    pub agents: Vec<AgentRecord>,
    pub total_tool_uses: u64,
    pub total_tokens: u64,
}

/// Non-negative integer, accepting `12.0`-style floats. `None` for anything else.
pub(crate) fn as_count(value: &serde_json::Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f as u64)
    })
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(as_count(&value).unwrap_or(0))
}

fn lenient_optional_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(as_count(&value))
}
