use thiserror::Error;

/// Service-wide error types for Clout.
#[derive(Debug, Error)]
pub enum CloutError {
    /// Storage layer error (RocksDB open/read/write, lock poisoning).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration (bad thresholds, unknown backend).
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CloutError {
    fn from(e: serde_json::Error) -> Self {
        CloutError::Serialization(e.to_string())
    }
}
