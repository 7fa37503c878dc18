//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ServiceConfig;

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   host: 127.0.0.1
///   port: 8080
/// telemetry:
///   log_level: info
/// ```
///
/// Every field is optional and falls back to the defaults shown above.
///
/// # Example
///
/// ```no_run
/// use incentive_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?;
/// println!("Listening on port {}", loader.config().server.port);
/// # Ok::<(), incentive_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown value types (`ConfigParseError`)
    /// - A value is present but unusable (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses configuration from YAML text; `source` names it in errors.
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<Self> {
        // An empty file is a valid, all-defaults configuration.
        let config: ServiceConfig = if content.trim().is_empty() {
            ServiceConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?
        };

        config.validate()?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: ServiceConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ServiceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/service.yaml"
    }

    #[test]
    fn test_load_bundled_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().server.host, "127.0.0.1");
        assert_eq!(loader.config().server.port, 8080);
        assert_eq!(loader.config().telemetry.log_level, "info");
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/service.yaml") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("service.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let loader = ConfigLoader::from_yaml_str("server:\n  port: 9090\n", "inline").unwrap();
        assert_eq!(loader.config().server.port, 9090);
        assert_eq!(loader.config().server.host, "127.0.0.1");
        assert_eq!(loader.config().telemetry.log_level, "info");
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let loader = ConfigLoader::from_yaml_str("", "inline").unwrap();
        assert_eq!(loader.config(), &ServiceConfig::default());
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        match ConfigLoader::from_yaml_str("server:\n  port: not-a-number\n", "inline") {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, "inline");
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let result = ConfigLoader::from_yaml_str("server:\n  port: 0\n", "inline");
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }
}
