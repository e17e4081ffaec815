// Metrics collection: one best-effort pass over every source per call.

use crate::config::SourcesConfig;
use crate::models::{ContextUsage, Snapshot};
use crate::sources::{self, SourceError};
use std::sync::Arc;

/// Hard cap on `recent_handoffs`.
pub const MAX_RECENT_HANDOFFS: usize = 10;
/// Hard cap on `suggestions_history`.
pub const MAX_SUGGESTIONS: usize = 20;

#[derive(Debug, Clone)]
pub struct MetricsCollector {
    sources: Arc<SourcesConfig>,
}

impl MetricsCollector {
    pub fn new(sources: SourcesConfig) -> Self {
        Self {
            sources: Arc::new(sources),
        }
    }

    pub fn sources(&self) -> &SourcesConfig {
        &self.sources
    }

    /// Build a snapshot from the current state of every source. Never fails: each
    /// source that is missing or malformed contributes its default instead.
    pub fn collect(&self) -> Snapshot {
        let src = self.sources.as_ref();

        let agent_state = or_default("agent_state", sources::read_agent_state(&src.agents_file));
        let percentage = or_default(
            "context_markers",
            sources::read_context_percentage(
                &src.context_dir,
                &src.context_prefix,
                &src.context_suffix,
            ),
        );
        let recent_handoffs = or_default(
            "handoffs",
            sources::read_recent_handoffs(&src.handoffs_dir, MAX_RECENT_HANDOFFS),
        );
        let suggestion_history = or_default(
            "suggestion_history",
            sources::read_suggestion_history(&src.suggestions_file, MAX_SUGGESTIONS),
        );

        Snapshot {
            generated_at: chrono::Local::now(),
            agents: agent_state.agents,
            context: ContextUsage {
                percentage,
                tokens: 0,
            },
            total_tool_uses: agent_state.total_tool_uses,
            total_tokens: agent_state.total_tokens,
            sessions: Vec::new(),
            suggestion_history,
            recent_handoffs,
        }
    }

    /// `collect` on the blocking pool. A panicked or cancelled scan degrades to an
    /// all-defaults snapshot so the route still answers.
    pub async fn collect_blocking(&self) -> Snapshot {
        let collector = self.clone();
        match tokio::task::spawn_blocking(move || collector.collect()).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "metrics collection task failed");
                Snapshot::empty(chrono::Local::now())
            }
        }
    }
}

fn or_default<T: Default>(source: &'static str, result: Result<T, SourceError>) -> T {
    match result {
        Ok(value) => value,
        Err(SourceError::Missing(path)) => {
            tracing::trace!(source, path = %path.display(), "source absent, using default");
            T::default()
        }
        Err(e) => {
            tracing::debug!(source, error = %e, "source unreadable, using default");
            T::default()
        }
    }
}
