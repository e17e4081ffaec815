use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default listen port for the dashboard.
pub const DEFAULT_PORT: u16 = 3847;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_host() -> String {
    "127.0.0.1".into()
}

/// Locations of the upstream artifacts the collector reads. Never written to.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// JSON document with `agents`, `total_tool_uses`, `total_tokens`.
    #[serde(default = "default_agents_file")]
    pub agents_file: PathBuf,
    /// Directory holding the per-session context percentage markers.
    #[serde(default = "default_context_dir")]
    pub context_dir: PathBuf,
    #[serde(default = "default_context_prefix")]
    pub context_prefix: String,
    #[serde(default = "default_context_suffix")]
    pub context_suffix: String,
    /// Root of the `<session>/<doc>.md` handoff tree.
    #[serde(default = "default_handoffs_dir")]
    pub handoffs_dir: PathBuf,
    /// JSON array of past suggestion outcomes.
    #[serde(default = "default_suggestions_file")]
    pub suggestions_file: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            agents_file: default_agents_file(),
            context_dir: default_context_dir(),
            context_prefix: default_context_prefix(),
            context_suffix: default_context_suffix(),
            handoffs_dir: default_handoffs_dir(),
            suggestions_file: default_suggestions_file(),
        }
    }
}

fn claude_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(".claude")
}

fn default_agents_file() -> PathBuf {
    claude_dir()
        .join("cache")
        .join("agents")
        .join("active-agents.json")
}

fn default_context_dir() -> PathBuf {
    std::env::temp_dir()
}

fn default_context_prefix() -> String {
    "claude-context-pct-".into()
}

fn default_context_suffix() -> String {
    ".txt".into()
}

fn default_handoffs_dir() -> PathBuf {
    PathBuf::from("thoughts").join("shared").join("handoffs")
}

fn default_suggestions_file() -> PathBuf {
    claude_dir().join("cache").join("suggestion-history.json")
}

impl AppConfig {
    /// Load from `CONFIG_FILE` (or `config.toml`), then apply `DASHBOARD_PORT`.
    pub fn load() -> anyhow::Result<Self> {
        let config_file = std::env::var_os("CONFIG_FILE").map(PathBuf::from);
        let port_override = std::env::var("DASHBOARD_PORT").ok();
        Self::load_from(
            config_file.as_deref(),
            Path::new("config.toml"),
            port_override.as_deref(),
        )
    }

    /// `config_file` must exist when given. Otherwise `default_file` is read if
    /// present and all defaults apply if not. `port_override` replaces `server.port`.
    pub fn load_from(
        config_file: Option<&Path>,
        default_file: &Path,
        port_override: Option<&str>,
    ) -> anyhow::Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                let s = std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("reading config {}: {}", path.display(), e))?;
                Self::load_from_str(&s)?
            }
            None => match std::fs::read_to_string(default_file) {
                Ok(s) => Self::load_from_str(&s)?,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
                Err(e) => {
                    return Err(anyhow::anyhow!(
                        "reading {}: {}",
                        default_file.display(),
                        e
                    ));
                }
            },
        };
        if let Some(port) = port_override {
            config.server.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("DASHBOARD_PORT={:?}: {}", port, e))?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.server.host.is_empty(),
            "server.host must be non-empty"
        );
        let sources = &self.sources;
        anyhow::ensure!(
            !sources.agents_file.as_os_str().is_empty(),
            "sources.agents_file must be non-empty"
        );
        anyhow::ensure!(
            !sources.context_dir.as_os_str().is_empty(),
            "sources.context_dir must be non-empty"
        );
        anyhow::ensure!(
            !sources.context_prefix.is_empty(),
            "sources.context_prefix must be non-empty"
        );
        anyhow::ensure!(
            !sources.handoffs_dir.as_os_str().is_empty(),
            "sources.handoffs_dir must be non-empty"
        );
        anyhow::ensure!(
            !sources.suggestions_file.as_os_str().is_empty(),
            "sources.suggestions_file must be non-empty"
        );
        Ok(())
    }
}
