// Shared test helpers: a throwaway tree of upstream sources

#![allow(dead_code)]

use agent_dashboard::collector::MetricsCollector;
use agent_dashboard::config::SourcesConfig;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

pub const MARKER_PREFIX: &str = "claude-context-pct-";

pub struct SourceTree {
    pub dir: TempDir,
}

impl SourceTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn sources(&self) -> SourcesConfig {
        SourcesConfig {
            agents_file: self.root().join("cache/agents/active-agents.json"),
            context_dir: self.root().join("tmp"),
            context_prefix: MARKER_PREFIX.into(),
            context_suffix: ".txt".into(),
            handoffs_dir: self.root().join("thoughts/shared/handoffs"),
            suggestions_file: self.root().join("cache/suggestion-history.json"),
        }
    }

    pub fn collector(&self) -> MetricsCollector {
        MetricsCollector::new(self.sources())
    }

    pub fn write_agents(&self, body: &str) {
        write(&self.sources().agents_file, body);
    }

    pub fn write_marker(&self, session: &str, body: &str) {
        let path = self
            .sources()
            .context_dir
            .join(format!("{MARKER_PREFIX}{session}.txt"));
        write(&path, body);
    }

    pub fn write_suggestions(&self, body: &str) {
        write(&self.sources().suggestions_file, body);
    }

    /// Writes `<handoffs>/<session>/<name>` with mtime = epoch + `secs`.
    pub fn add_handoff(&self, session: &str, name: &str, body: &str, secs: u64) -> PathBuf {
        let path = self.sources().handoffs_dir.join(session).join(name);
        write(&path, body);
        let f = std::fs::File::options().write(true).open(&path).unwrap();
        f.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .unwrap();
        path
    }
}

fn write(path: &Path, body: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, body).unwrap();
}

pub const SAMPLE_AGENTS: &str = r#"{"agents":[{"name":"a1","status":"running","tool_uses":3,"tokens_used":1200}],"total_tool_uses":3,"total_tokens":1200}"#;
