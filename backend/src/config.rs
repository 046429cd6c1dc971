//! Application configuration.
//!
//! Settings come from an optional `taskmaster.toml` file and are then
//! overridden by environment variables, so a deployment can run with no file
//! at all.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::db::RepositoryError;

pub const CONFIG_FILE: &str = "taskmaster.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub chat: ChatConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where the dataset lives and how strictly it is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Invariant violations fail the load when true, are warnings otherwise.
    #[serde(default = "default_strict_validation")]
    pub strict_validation: bool,
}

/// Upstream chat-completion deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_deployment")]
    pub deployment: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_strict_validation() -> bool {
    true
}

fn default_deployment() -> String {
    "gpt-4o".to_string()
}

fn default_api_version() -> String {
    "2024-08-01-preview".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            strict_validation: default_strict_validation(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            deployment: default_deployment(),
            api_key: None,
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerSettings {
    /// `host:port` for binding the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ChatConfig {
    /// Whether both an endpoint and a key are set.
    pub fn is_configured(&self) -> bool {
        let set = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        set(&self.endpoint) && set(&self.api_key)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// First existing config file among the standard locations.
    ///
    /// Searches for `taskmaster.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn default_location() -> Option<PathBuf> {
        [
            PathBuf::from(CONFIG_FILE),
            PathBuf::from("backend").join(CONFIG_FILE),
            PathBuf::from("..").join(CONFIG_FILE),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Load configuration from the default location.
    ///
    /// # Returns
    /// * `Err(RepositoryError)` if no config file is found or it fails to parse
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        match Self::default_location() {
            Some(path) => Self::from_file(path),
            None => Err(RepositoryError::configuration(format!(
                "No {} found in standard locations",
                CONFIG_FILE
            ))),
        }
    }

    /// File settings (or defaults when there is no file), then environment.
    pub fn load() -> Result<Self, RepositoryError> {
        let mut config = match Self::default_location() {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    ///
    /// # Environment Variables
    /// - `HOST`, `PORT`: listener address
    /// - `DATA_DIR`: directory holding `contestants.json` and `seasons.json`
    /// - `STRICT_VALIDATION`: `true` | `false`
    /// - `AZURE_OPENAI_ENDPOINT`, `AZURE_OPENAI_API_KEY`: upstream chat credentials
    /// - `AZURE_OPENAI_DEPLOYMENT`, `AZURE_OPENAI_API_VERSION`
    /// - `CHAT_TIMEOUT_SECS`: upstream request timeout
    pub fn apply_env_overrides(&mut self) -> Result<(), RepositoryError> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), RepositoryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = text("HOST") {
            self.server.host = host;
        }
        if let Some(port) = parse_override(&text, "PORT")? {
            self.server.port = port;
        }
        if let Some(dir) = text("DATA_DIR") {
            self.dataset.data_dir = PathBuf::from(dir);
        }
        if let Some(strict) = parse_override(&text, "STRICT_VALIDATION")? {
            self.dataset.strict_validation = strict;
        }
        if let Some(endpoint) = text("AZURE_OPENAI_ENDPOINT") {
            self.chat.endpoint = Some(endpoint);
        }
        if let Some(key) = text("AZURE_OPENAI_API_KEY") {
            self.chat.api_key = Some(key);
        }
        if let Some(deployment) = text("AZURE_OPENAI_DEPLOYMENT") {
            self.chat.deployment = deployment;
        }
        if let Some(version) = text("AZURE_OPENAI_API_VERSION") {
            self.chat.api_version = version;
        }
        if let Some(timeout) = parse_override(&text, "CHAT_TIMEOUT_SECS")? {
            self.chat.timeout_secs = timeout;
        }
        Ok(())
    }
}

fn parse_override<T, F>(text: &F, key: &str) -> Result<Option<T>, RepositoryError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match text(key) {
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            RepositoryError::configuration(format!("{} has an invalid value: {}", key, raw))
        }),
        None => Ok(None),
    }
}
