// crates/clout-store/src/memory.rs
//
// In-memory repute store implementing the `ReputeStore` trait.
//
// Backed by a HashMap behind a RwLock. Nothing is persisted; used by tests
// and by nodes configured with the `memory` backend.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use async_trait::async_trait;

use clout_core::error::CloutError;
use clout_core::repute::ReputeRecord;
use clout_core::traits::ReputeStore;

/// In-memory repute store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    /// Map from storage key to record.
    records: RwLock<HashMap<String, ReputeRecord>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of records currently stored.
    ///
    /// Counts through a poisoned lock; the trait methods report poisoning as
    /// `CloutError::Storage` instead.
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Return whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReputeStore for InMemoryStore {
    async fn insert_if_absent(&self, key: &str, record: &ReputeRecord) -> Result<bool, CloutError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| CloutError::Storage(format!("RwLock poisoned: {}", e)))?;
        match records.entry(key.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(true)
            }
        }
    }

    async fn iterate(&self) -> Result<Vec<ReputeRecord>, CloutError> {
        let records = self
            .records
            .read()
            .map_err(|e| CloutError::Storage(format!("RwLock poisoned: {}", e)))?;
        Ok(records.values().cloned().collect())
    }

    async fn clear(&self) -> Result<(), CloutError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| CloutError::Storage(format!("RwLock poisoned: {}", e)))?;
        records.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_duplicate() {
        let store = InMemoryStore::new();
        let record = ReputeRecord::new("alice", "bob", "r1", "clarity", 10.0);
        let key = record.storage_key();

        assert!(store.insert_if_absent(&key, &record).await.unwrap());
        assert!(!store.insert_if_absent(&key, &record).await.unwrap());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_same_rid_different_reputer_is_distinct() {
        let store = InMemoryStore::new();
        let a = ReputeRecord::new("alice", "bob", "r1", "reach", 3.0);
        let b = ReputeRecord::new("carol", "bob", "r1", "reach", 3.0);

        assert!(store.insert_if_absent(&a.storage_key(), &a).await.unwrap());
        assert!(store.insert_if_absent(&b.storage_key(), &b).await.unwrap());
        assert_eq!(store.iterate().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_clear_empties_store() {
        let store = InMemoryStore::new();
        let record = ReputeRecord::new("alice", "bob", "r1", "reach", 3.0);
        store.insert_if_absent(&record.storage_key(), &record).await.unwrap();
        assert!(store.contains_reputee("bob").await.unwrap());

        store.clear().await.unwrap();
        assert!(store.is_empty());
        assert!(!store.contains_reputee("bob").await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_inserts_store_once() {
        let store = std::sync::Arc::new(InMemoryStore::new());
        let record = ReputeRecord::new("alice", "bob", "r1", "reach", 3.0);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            let record = record.clone();
            handles.push(tokio::spawn(async move {
                store.insert_if_absent(&record.storage_key(), &record).await.unwrap()
            }));
        }

        let mut inserted = 0;
        for h in handles {
            if h.await.unwrap() {
                inserted += 1;
            }
        }
        assert_eq!(inserted, 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_poisoned_lock() {
        let store = std::sync::Arc::new(InMemoryStore::new());
        let r = ReputeRecord::new("alice", "bob", "r1", "reach", 4.0);
        store.insert_if_absent(&r.storage_key(), &r).await.unwrap();

        let writer = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = writer.records.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(store.records.is_poisoned());

        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert!(matches!(store.iterate().await, Err(CloutError::Storage(_))));
        assert!(matches!(
            store.insert_if_absent("k", &r).await,
            Err(CloutError::Storage(_))
        ));
    }
}
