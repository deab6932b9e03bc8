//! Server configuration parsing.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::repo::{DataSources, ResolvePolicy};

/// Server configuration loaded from a TOML file.
///
/// Every section has defaults, so an empty file yields a server bound to
/// localhost with no data sources.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Server bind settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// CSV data source locations.
    pub data: DataConfig,
    /// Repository behavior settings.
    pub repository: RepositoryConfig,
}

/// Server bind settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1" or "0.0.0.0").
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Logging settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (e.g., "info" or "movie_studio=debug,info").
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// "stdout", "stderr", or a file path.
    pub output: String,
    /// Include timestamps in log lines.
    pub timestamps: bool,
    /// Use ANSI colors when writing to a terminal.
    pub color: bool,
    /// Include the event's module target.
    pub target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            output: "stderr".to_string(),
            timestamps: true,
            color: true,
            target: false,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// CSV data source locations. A missing path means "no data yet".
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the metadata CSV.
    pub metadata: Option<PathBuf>,
    /// Path to the watch-duration stats CSV.
    pub stats: Option<PathBuf>,
}

impl DataConfig {
    /// The repository's view of the configured sources.
    pub fn sources(&self) -> DataSources {
        DataSources {
            metadata: self.metadata.clone(),
            stats: self.stats.clone(),
        }
    }
}

/// Repository behavior settings.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Which record represents a language when a movie has several:
    /// "oldest" (default) or "latest".
    pub resolve: ResolvePolicy,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().display().to_string(), e))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Get the socket address string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

/// Configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(String, std::io::Error),
    /// TOML parse error.
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Failed to read config file '{}': {}", path, e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
