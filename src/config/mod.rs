// src/config/mod.rs
// Credential and server configuration, loaded once at startup and
// passed down explicitly (no ambient global state)

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{PricelError, Result};

/// Gemini API credential from `token.json`
#[derive(Debug, Clone, Deserialize)]
pub struct Credential {
    pub api_key: String,
}

impl Credential {
    /// Load the credential file. A missing or unreadable file, a body
    /// without `api_key`, or an empty key are all fatal to startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PricelError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        let credential: Credential = serde_json::from_str(&contents).map_err(|e| {
            PricelError::Config(format!("cannot parse {}: {}", path.display(), e))
        })?;

        if credential.api_key.trim().is_empty() {
            return Err(PricelError::Config(format!(
                "{}: api_key is empty",
                path.display()
            )));
        }

        debug!(path = %path.display(), "loaded credential");
        Ok(credential)
    }
}

/// Listener configuration from `config.json`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Load the server config. A missing file silently uses defaults;
    /// a malformed file logs a warning and uses defaults.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded server config");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse config file, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "config file not found, using defaults");
                Self::default()
            }
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_credential_load() {
        let file = write_file(r#"{"api_key": "secret-key"}"#);
        let credential = Credential::load(file.path()).unwrap();
        assert_eq!(credential.api_key, "secret-key");
    }

    #[test]
    fn test_credential_missing_file_is_config_error() {
        let err = Credential::load("does/not/exist/token.json").unwrap_err();
        assert!(matches!(err, PricelError::Config(_)));
        assert!(err.to_string().contains("token.json"));
    }

    #[test]
    fn test_credential_missing_key_is_config_error() {
        let file = write_file(r#"{"token": "wrong field"}"#);
        let err = Credential::load(file.path()).unwrap_err();
        assert!(matches!(err, PricelError::Config(_)));
    }

    #[test]
    fn test_credential_empty_key_is_config_error() {
        let file = write_file(r#"{"api_key": "  "}"#);
        let err = Credential::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("api_key is empty"));
    }

    #[test]
    fn test_server_config_load() {
        let file = write_file(r#"{"host": "127.0.0.1", "port": 12345}"#);
        let config = ServerConfig::load(file.path());
        assert_eq!(config.bind_address(), "127.0.0.1:12345");
    }

    #[test]
    fn test_server_config_partial_file_fills_defaults() {
        let file = write_file(r#"{"port": 9090}"#);
        let config = ServerConfig::load(file.path());
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_server_config_missing_file_uses_defaults() {
        let config = ServerConfig::load("does/not/exist/config.json");
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_config_malformed_file_uses_defaults() {
        let file = write_file("not json at all");
        let config = ServerConfig::load(file.path());
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }
}
