use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::{SourceError, read_source};
use crate::models::{AgentRecord, AgentState, as_count};

/// Parse the agent-state document. `agents`, `total_tool_uses` and `total_tokens`
/// are read independently: a bad value in one leaves the others intact. Only a
/// document that is not a JSON object is rejected outright.
pub fn read_agent_state(path: &Path) -> Result<AgentState, SourceError> {
    let raw = read_source(path)?;
    let doc: Value = serde_json::from_str(&raw).map_err(|e| SourceError::parse(path, e))?;
    let Value::Object(doc) = doc else {
        return Err(SourceError::parse(path, "expected a JSON object"));
    };

    let agents = doc
        .get("agents")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter(|entry| entry.is_object())
                .filter_map(|entry| AgentRecord::deserialize(entry).ok())
                .collect()
        })
        .unwrap_or_default();

    Ok(AgentState {
        agents,
        total_tool_uses: doc.get("total_tool_uses").and_then(as_count).unwrap_or(0),
        total_tokens: doc.get("total_tokens").and_then(as_count).unwrap_or(0),
    })
}
