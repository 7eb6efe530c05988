//! Error types for the analysis core
//!
//! Only programmer errors surface here: bad configuration and malformed
//! tables, both reported when the tables are loaded. Expected absence of
//! data (empty text, no keyword, zero sentences) is signalled with sentinel
//! values by the researches themselves and never becomes an error.

use thiserror::Error;

/// Errors raised while building the research registry or loading config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required research: {0}")]
    MissingResearch(String),

    #[error("Malformed inflection rule `{pattern}`: {reason}")]
    MalformedRule { pattern: String, reason: String },

    #[error("Malformed readability table: {0}")]
    MalformedReadabilityTable(String),

    #[error("Malformed keyword density table: {0}")]
    MalformedDensityTable(String),

    #[error("Malformed link policy: {0}")]
    MalformedLinkPolicy(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
