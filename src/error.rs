//! Error types shared by the discovery pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by a CodeCommit API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    #[error("{operation} failed: {message}")]
    Service {
        operation: &'static str,
        message: String,
    },

    #[error("{operation} response is missing `{field}`")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },
}

/// Errors that abort a discovery run.
///
/// Remote failures are carried as-is through [`DiscoveryError::Api`]; nothing is
/// retried or downgraded on the way out of the navigator.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Discovery interrupted")]
    Interrupted,

    #[error("Failed to build CodeCommit client: {0}")]
    Client(String),
}

/// Errors raised while loading or saving configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Duplicate credentials id '{0}'")]
    DuplicateCredentials(String),

    #[error("No configuration directory available on this platform")]
    NoConfigDir,
}
