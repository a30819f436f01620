use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SalesAgentError};

/// Server name announced in `initialize` unless overridden.
pub const DEFAULT_SERVER_NAME: &str = "sales-agent";

/// Environment variable overriding the announced server name.
pub const ENV_SERVER_NAME: &str = "MCP_SERVER_NAME";
/// Environment variable overriding the announced server version.
pub const ENV_SERVER_VERSION: &str = "MCP_SERVER_VERSION";
/// Environment variable pointing at the SQLite database file.
pub const ENV_DB_PATH: &str = "SALES_DB_PATH";

/// Runtime configuration for the server.
///
/// Layered as defaults, then an optional TOML file, then environment.
/// Command-line flags are applied on top by the binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Name reported as `serverInfo.name`.
    pub name: String,
    /// Version reported as `serverInfo.version`.
    pub version: String,
    /// SQLite database file. `None` means use `default_db_path()`.
    pub db_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            db_path: None,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from `file` (if given) and the process environment.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::from_lookup(file, |key| std::env::var(key).ok())
    }

    /// Like `load`, reading environment variables through `lookup`.
    pub fn from_lookup<F>(file: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match file {
            Some(path) => load_config_file(path)?,
            None => Self::default(),
        };

        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        if let Some(name) = var(ENV_SERVER_NAME) {
            config.name = name;
        }
        if let Some(version) = var(ENV_SERVER_VERSION) {
            config.version = version;
        }
        if let Some(path) = var(ENV_DB_PATH) {
            config.db_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// The database file to use: the configured one, else the per-user default.
    pub fn resolved_db_path(&self) -> Option<PathBuf> {
        self.db_path.clone().or_else(default_db_path)
    }
}

/// Returns `<data dir>/sales-mcp/sales.db` for the current user.
pub fn default_db_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("sales-mcp").join("sales.db"))
}

/// Reads a TOML configuration file. Missing keys keep their defaults.
pub fn load_config_file(path: &Path) -> Result<ServerConfig> {
    let contents = fs::read_to_string(path).map_err(|e| SalesAgentError::Config {
        message: format!("failed to read config file '{}': {}", path.display(), e),
    })?;

    toml::from_str(&contents).map_err(|e| SalesAgentError::Config {
        message: format!("failed to parse config file '{}': {}", path.display(), e),
    })
}
