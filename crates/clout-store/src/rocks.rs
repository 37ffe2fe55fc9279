// crates/clout-store/src/rocks.rs
//
// RocksDB-backed persistent storage for repute records.
//
// Key format:
//   - `repute:{rid}-{reputer}-{reputee}` -> JSON-serialized ReputeRecord
//
// All records share one prefix so a full scan is a single prefix iteration.

use std::sync::Mutex;

use async_trait::async_trait;
use rocksdb::{DBWithThreadMode, MultiThreaded, Options, WriteBatch};

use clout_core::error::CloutError;
use clout_core::repute::ReputeRecord;
use clout_core::traits::ReputeStore;

const RECORD_PREFIX: &[u8] = b"repute:";

/// RocksDB wrapper implementing the `ReputeStore` trait.
#[derive(Debug)]
pub struct RocksStore {
    db: DBWithThreadMode<MultiThreaded>,
    /// Serializes the get-then-put of `insert_if_absent` within this process.
    write_lock: Mutex<()>,
}

impl RocksStore {
    /// Open a RocksDB database at the given filesystem path.
    ///
    /// Creates the database directory if it does not exist.
    pub fn open(path: &str) -> Result<Self, CloutError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DBWithThreadMode::<MultiThreaded>::open(&opts, path)
            .map_err(|e| CloutError::Storage(format!("Failed to open RocksDB at {}: {}", path, e)))?;

        tracing::info!("Repute store opened at {}", path);
        Ok(Self {
            db,
            write_lock: Mutex::new(()),
        })
    }

    /// Build the on-disk key for a storage key: `repute:{key}`.
    fn record_key(key: &str) -> Vec<u8> {
        let mut out = RECORD_PREFIX.to_vec();
        out.extend_from_slice(key.as_bytes());
        out
    }

    /// Put raw bytes into RocksDB, mapping errors to CloutError::Storage.
    fn put_raw(&self, key: &[u8], value: &[u8]) -> Result<(), CloutError> {
        self.db
            .put(key, value)
            .map_err(|e| CloutError::Storage(format!("RocksDB put failed: {}", e)))
    }

    /// Get raw bytes from RocksDB, mapping errors to CloutError::Storage.
    fn get_raw(&self, key: &[u8]) -> Result<Option<Vec<u8>>, CloutError> {
        self.db
            .get(key)
            .map_err(|e| CloutError::Storage(format!("RocksDB get failed: {}", e)))
    }

    /// Walk every `repute:` entry, handing the raw key and value to `visit`.
    fn scan_raw<F>(&self, mut visit: F) -> Result<(), CloutError>
    where
        F: FnMut(&[u8], &[u8]) -> Result<(), CloutError>,
    {
        for item in self.db.prefix_iterator(RECORD_PREFIX) {
            let (key, value) = item
                .map_err(|e| CloutError::Storage(format!("RocksDB iteration error: {}", e)))?;

            // Stop when the prefix no longer matches.
            if !key.starts_with(RECORD_PREFIX) {
                break;
            }
            visit(&key, &value)?;
        }
        Ok(())
    }

    /// Public accessor: fetch the record stored under a storage key.
    pub fn get_record_sync(&self, key: &str) -> Result<Option<ReputeRecord>, CloutError> {
        match self.get_raw(&Self::record_key(key))? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Public accessor: insert-if-absent without going through the async trait.
    pub fn insert_if_absent_sync(&self, key: &str, record: &ReputeRecord) -> Result<bool, CloutError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| CloutError::Storage(format!("Write lock poisoned: {}", e)))?;

        let db_key = Self::record_key(key);
        if self.get_raw(&db_key)?.is_some() {
            return Ok(false);
        }
        let json = serde_json::to_vec(record)?;
        self.put_raw(&db_key, &json)?;
        Ok(true)
    }

    /// Public accessor: load every record synchronously.
    pub fn records_sync(&self) -> Result<Vec<ReputeRecord>, CloutError> {
        let mut records: Vec<ReputeRecord> = Vec::new();
        self.scan_raw(|_key, value| {
            records.push(serde_json::from_slice(value)?);
            Ok(())
        })?;
        Ok(records)
    }

    /// Public accessor: delete every record in one write batch.
    pub fn clear_sync(&self) -> Result<(), CloutError> {
        let mut batch = WriteBatch::default();
        self.scan_raw(|key, _value| {
            batch.delete(key);
            Ok(())
        })?;
        self.db
            .write(batch)
            .map_err(|e| CloutError::Storage(format!("RocksDB clear failed: {}", e)))
    }
}

#[async_trait]
impl ReputeStore for RocksStore {
    async fn insert_if_absent(&self, key: &str, record: &ReputeRecord) -> Result<bool, CloutError> {
        self.insert_if_absent_sync(key, record)
    }

    async fn iterate(&self) -> Result<Vec<ReputeRecord>, CloutError> {
        self.records_sync()
    }

    async fn clear(&self) -> Result<(), CloutError> {
        self.clear_sync()
    }
}
