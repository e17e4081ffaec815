// Snapshot and source record models

mod agent;
mod handoff;
mod snapshot;

pub(crate) use agent::as_count;
pub use agent::{AgentRecord, AgentState, AgentStatus};
pub use handoff::HandoffRecord;
pub use snapshot::{ContextUsage, Snapshot};
