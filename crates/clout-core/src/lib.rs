// crates/clout-core/src/lib.rs
//
// clout-core: Core types, errors, and trait interfaces for the Clout
// reputation service.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines the endorsement record format, the derived score types, the
// error type, and the store trait the scoring engine reads from.

pub mod error;
pub mod repute;
pub mod score;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use clout_core::ReputeRecord;`

// Record types
pub use repute::{Feature, Repute, ReputeRecord};

// Score types
pub use score::{FeatureScore, Reputation};

// Error type
pub use error::CloutError;

// Traits
pub use traits::ReputeStore;
