// crates/clout-store/src/backend.rs
//
// Store backend selection. The backend is an explicit configuration value
// threaded into store construction, never inferred from ambient state.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use clout_core::error::CloutError;
use clout_core::traits::ReputeStore;

use crate::memory::InMemoryStore;
use crate::rocks::RocksStore;

/// Which store implementation to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Durable RocksDB database at `StoreConfig::path`.
    #[default]
    Rocksdb,
    /// Process-local HashMap. Lost on exit.
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Rocksdb => f.write_str("rocksdb"),
            StoreBackend::Memory => f.write_str("memory"),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = CloutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rocksdb" => Ok(StoreBackend::Rocksdb),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(CloutError::Config(format!(
                "Unknown store backend: {}. Use 'rocksdb' or 'memory'.",
                other
            ))),
        }
    }
}

/// Store configuration, usually the `[store]` table of the daemon config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Database directory for the RocksDB backend. Ignored by `memory`.
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_store_path() -> String {
    "~/.clout/data/reputes".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_store_path(),
        }
    }
}

/// Construct the configured store.
///
/// The path is used as given; callers expand `~` before calling.
pub fn open_store(config: &StoreConfig) -> Result<Arc<dyn ReputeStore>, CloutError> {
    match config.backend {
        StoreBackend::Rocksdb => Ok(Arc::new(RocksStore::open(&config.path)?)),
        StoreBackend::Memory => {
            tracing::info!("Using in-memory repute store; records will not persist");
            Ok(Arc::new(InMemoryStore::new()))
        }
    }
}
