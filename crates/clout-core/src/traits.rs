// crates/clout-core/src/traits.rs

use async_trait::async_trait;

use crate::error::CloutError;
use crate::repute::ReputeRecord;

/// Trait for the endorsement record store.
///
/// Implemented by clout-store (RocksDB and in-memory backends). Keys are
/// `ReputeRecord::storage_key` values; records are immutable once stored.
#[async_trait]
pub trait ReputeStore: Send + Sync {
    /// Insert `record` under `key` unless the key is already present.
    ///
    /// Returns `true` if the record was inserted, `false` if the key existed.
    /// A duplicate key is not an error.
    async fn insert_if_absent(&self, key: &str, record: &ReputeRecord) -> Result<bool, CloutError>;

    /// Return every stored record, in no particular order.
    async fn iterate(&self) -> Result<Vec<ReputeRecord>, CloutError>;

    /// Remove every record. Intended for test setup and teardown.
    async fn clear(&self) -> Result<(), CloutError>;

    /// Whether any stored record names `reputee`.
    async fn contains_reputee(&self, reputee: &str) -> Result<bool, CloutError> {
        Ok(self.iterate().await?.iter().any(|r| r.reputee == reputee))
    }
}
