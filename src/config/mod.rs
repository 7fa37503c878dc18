//! Configuration loading and management for the Incentive Engine service.
//!
//! This module loads the service settings (HTTP bind address and log level)
//! from a YAML file. The scoring charts and incentive table are compiled into
//! the engine and are not part of the configuration.
//!
//! # Example
//!
//! ```no_run
//! use incentive_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Binding {}", loader.config().server.socket_addr().unwrap());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ServerConfig, ServiceConfig, TelemetryConfig};
