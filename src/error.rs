//! Error types for the Incentive Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while evaluating a manager's
//! performance or loading service configuration.

use thiserror::Error;

/// The main error type for the Incentive Engine.
///
/// Numeric inputs never produce an error: every percentage degrades to the
/// nearest defined band. Errors come from designation validation, incentive
/// table lookups and configuration loading.
///
/// # Example
///
/// ```
/// use incentive_engine::error::EngineError;
///
/// let error = EngineError::InvalidDesignation {
///     value: "REGIONAL HEAD".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid designation: REGIONAL HEAD");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The designation text does not name one of the supported designations.
    #[error("Invalid designation: {value}")]
    InvalidDesignation {
        /// The rejected designation text.
        value: String,
    },

    /// The incentive table has no amount for the designation and slab.
    ///
    /// This means the slab classifier and the incentive table disagree.
    #[error("No incentive defined for designation '{designation}' in slab '{slab}'")]
    IncentiveNotFound {
        /// The designation display name.
        designation: String,
        /// The slab label that was looked up.
        slab: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was present but unusable.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
