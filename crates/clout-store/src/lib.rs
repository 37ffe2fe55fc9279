// crates/clout-store/src/lib.rs
//
// clout-store: Storage layer for the Clout reputation service.
//
// Provides a RocksDB-backed repute store for production, an in-memory store
// for tests and throwaway nodes, and backend selection from explicit
// configuration.

pub mod backend;
pub mod memory;
pub mod rocks;

// Re-export key types for ergonomic access from downstream crates.
pub use backend::{open_store, StoreBackend, StoreConfig};
pub use memory::InMemoryStore;
pub use rocks::RocksStore;
