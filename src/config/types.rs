//! Configuration types for the incentive service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML service configuration file. Scoring
//! thresholds and the incentive chart are not configurable.

use std::net::SocketAddr;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// The TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Resolves the configured host and port into a socket address.
    pub fn socket_addr(&self) -> EngineResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| EngineError::InvalidConfig {
                field: "server.host".to_string(),
                message: e.to_string(),
            })
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TelemetryConfig {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl ServiceConfig {
    /// Checks values that deserialize cleanly but cannot be used.
    pub fn validate(&self) -> EngineResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "server.host".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.server.port == 0 {
            return Err(EngineError::InvalidConfig {
                field: "server.port".to_string(),
                message: "must be non-zero".to_string(),
            });
        }
        if self.telemetry.log_level.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "telemetry.log_level".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
