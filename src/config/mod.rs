//! Configuration loading and management
//!
//! Configuration comes from an optional YAML file plus a few environment
//! overrides:
//!
//! ```yaml
//! server:
//!   host: 0.0.0.0
//!   port: 8000
//! database:
//!   url: sqlite://pedidos.db?mode=rwc
//!   max_connections: 5
//! templates_dir: ./templates
//! session_key: <128+ hex characters>
//! ```

use crate::core::ConfigError;
use axum_extra::extract::cookie::Key;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the YAML configuration file
pub const CONFIG_ENV: &str = "PEDIDOS_CONFIG";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// `host:port` string for binding the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Relational store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `memory`, `sqlite:...` or `postgres://...`
    pub url: String,

    /// Pool size for SQL backends
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://pedidos.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,

    /// Directory of `.html` templates replacing the embedded ones
    pub templates_dir: Option<String>,

    /// Hex-encoded key (at least 64 bytes) signing the message cookie
    pub session_key: Option<String>,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::parse(&content, Some(path.display().to_string()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, None)
    }

    fn parse(yaml: &str, file: Option<String>) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `PEDIDOS_CONFIG` (defaults when unset),
    /// then apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_yaml_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Decoded cookie signing key, if one is configured
    pub fn session_key(&self) -> Result<Option<Key>, ConfigError> {
        let Some(raw) = &self.session_key else {
            return Ok(None);
        };
        let invalid = |message: &str| ConfigError::InvalidValue {
            field: "session_key".to_string(),
            value: "<redacted>".to_string(),
            message: message.to_string(),
        };
        let bytes = hex::decode(raw.trim()).map_err(|_| invalid("expected hex"))?;
        let key = Key::try_from(bytes.as_slice())
            .map_err(|_| invalid("expected at least 64 bytes (128 hex characters)"))?;
        Ok(Some(key))
    }

    /// Apply `DATABASE_URL`, `PEDIDOS_HOST`, `PEDIDOS_PORT` and
    /// `PEDIDOS_SESSION_KEY` from `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(host) = lookup("PEDIDOS_HOST") {
            self.server.host = host;
        }
        if let Some(key) = lookup("PEDIDOS_SESSION_KEY") {
            self.session_key = Some(key);
        }
        if let Some(port) = lookup("PEDIDOS_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                field: "PEDIDOS_PORT".to_string(),
                value: port.clone(),
                message: "expected a port number".to_string(),
            })?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.url".to_string(),
                value: self.database.url.clone(),
                message: "must not be empty".to_string(),
            });
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.max_connections".to_string(),
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        self.session_key()?;
        Ok(())
    }
}
