//! Error types for option and configuration parsing.
//!
//! Translation itself never fails: malformed codes fall back to literal text.
//! These errors only surface when options or a [`Config`](crate::Config) are
//! built from text.

use thiserror::Error;

/// Errors produced when parsing an option list such as `"color, format"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The list contained a name that is not a known option.
    #[error("unknown translation option '{0}'")]
    UnknownOption(String),

    /// The list contained no option names at all.
    #[error("option list is empty")]
    Empty,
}

/// Errors produced when loading a translator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The YAML document could not be parsed, did not match the schema, or
    /// named an unknown option.
    #[error("invalid translator config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
