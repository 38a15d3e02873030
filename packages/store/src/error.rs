//! Error types for the persistence layer.

use thiserror::Error;

/// Failure reported by a [`crate::KeyValueStore`] backend.
///
/// [`crate::Storage`] logs and drops these; they never reach a page.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available in this environment")]
    Unavailable,

    #[error("failed to write key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Failure loading a [`crate::GymunityConfig`] file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
