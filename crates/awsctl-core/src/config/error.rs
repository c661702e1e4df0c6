//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, saving, or resolving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("default profile '{0}' does not exist")]
    DefaultProfileMissing(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("could not determine a configuration directory for this platform")]
    NoConfigDir,

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
