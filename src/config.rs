//! Service configuration: `application.yaml` plus environment overrides.
//!
//! Lookup order, later wins:
//! 1. Built-in defaults.
//! 2. The YAML file named by `GREET_CONFIG` (default `application.yaml`);
//!    a missing file is not an error.
//! 3. `HOST`, `PORT`, `GREETING`, `GOOGLE_CLIENT_ID`, `WEB_ROOT`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_GREETING: &str = "Ciao";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WEB_ROOT: &str = "client/dist";
pub const DEFAULT_CONFIG_PATH: &str = "application.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("invalid yaml in {path}: {source}")]
    Yaml { path: String, source: serde_yaml::Error },
    #[error("invalid {key}: {value:?}")]
    InvalidVar { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub greeting: String,
    pub host: String,
    pub port: u16,
    pub web_root: PathBuf,
    /// Google OAuth client id; `None` disables bearer verification.
    pub google_client_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_owned(),
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            web_root: PathBuf::from(DEFAULT_WEB_ROOT),
            google_client_id: None,
        }
    }
}

// Mirrors the YAML layout; every field optional so partial files work.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    app: AppSection,
    #[serde(default)]
    server: ServerSection,
    #[serde(default)]
    security: SecuritySection,
}

#[derive(Debug, Default, Deserialize)]
struct AppSection {
    greeting: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerSection {
    host: Option<String>,
    port: Option<u16>,
    web_root: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct SecuritySection {
    google_client_id: Option<String>,
}

impl Config {
    /// Load the file named by `GREET_CONFIG`, then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error for unreadable or malformed YAML and unparsable `PORT`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("GREET_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
        let mut config = Self::from_file(Path::new(&path))?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Defaults overlaid with `path`, if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.display().to_string(), source })?;
        Self::from_yaml(&raw).map_err(|source| ConfigError::Yaml { path: path.display().to_string(), source })
    }

    /// Defaults overlaid with a YAML document.
    ///
    /// # Errors
    ///
    /// Returns the YAML parse error.
    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        let file: FileConfig = if raw.trim().is_empty() { FileConfig::default() } else { serde_yaml::from_str(raw)? };
        let defaults = Self::default();
        Ok(Self {
            greeting: file.app.greeting.unwrap_or(defaults.greeting),
            host: file.server.host.unwrap_or(defaults.host),
            port: file.server.port.unwrap_or(defaults.port),
            web_root: file.server.web_root.unwrap_or(defaults.web_root),
            google_client_id: non_empty(file.security.google_client_id),
        })
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidVar` when `PORT` is not a port number.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(greeting) = lookup("GREETING") {
            self.greeting = greeting;
        }
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVar { key: "PORT", value: port.clone() })?;
        }
        if let Some(web_root) = lookup("WEB_ROOT") {
            self.web_root = PathBuf::from(web_root);
        }
        if let Some(client_id) = lookup("GOOGLE_CLIENT_ID") {
            self.google_client_id = non_empty(Some(client_id));
        }
        Ok(())
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
