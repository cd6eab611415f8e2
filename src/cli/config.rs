//! Service configuration
//!
//! Loaded from an optional JSON file; command line flags override it.
//!
//! ```json
//! {
//!   "database_path": "./database.sqlite",
//!   "log_level": "info",
//!   "server": { "port": 3010, "static_dir": "static" }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::Severity;
use crate::rest_api::ServerConfig;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// SQLite database file (default "./database.sqlite")
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./database.sqlite")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            log_level: default_log_level(),
            server: ServerConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: ServiceConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Build the effective configuration: file (if any), then flag overrides
    pub fn resolve(
        path: Option<&Path>,
        db: Option<PathBuf>,
        port: Option<u16>,
    ) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(db) = db {
            config.database_path = db;
        }
        if let Some(port) = port {
            config.server.port = port;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(CliError::config_error("database_path must not be empty"));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        self.severity()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(CliError::config_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("dinedb.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = ServiceConfig::resolve(None, None, None).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.server.port, 3010);
    }

    #[test]
    fn test_load_partial_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"{"database_path": "/srv/catalog.sqlite", "server": {"port": 9000}}"#,
        );

        let config = ServiceConfig::load(&path).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/srv/catalog.sqlite"));
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_flags_override_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, r#"{"server": {"port": 9000}}"#);

        let config =
            ServiceConfig::resolve(Some(&path), Some(PathBuf::from("other.sqlite")), Some(7000)).unwrap();
        assert_eq!(config.database_path, PathBuf::from("other.sqlite"));
        assert_eq!(config.server.port, 7000);
    }

    #[test]
    fn test_invalid_json_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "{not json");
        let err = ServiceConfig::load(&path).unwrap_err();
        assert!(err.message().starts_with("Invalid config JSON"));
    }

    #[test]
    fn test_zero_port_rejected() {
        assert!(ServiceConfig::resolve(None, None, Some(0)).is_err());
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, r#"{"log_level": "loud"}"#);
        assert!(ServiceConfig::load(&path).is_err());
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = ServiceConfig::load(&tmp.path().join("absent.json")).unwrap_err();
        assert!(err.message().starts_with("Failed to read config"));
    }
}
