// crates/clout-rpc/src/error.rs
//
// Boundary-layer failures. Handlers return these as `String` inside the
// JSON-RPC envelope; the Display text is what callers see.

use thiserror::Error;

use clout_core::error::CloutError;

#[derive(Debug, Error)]
pub enum RpcError {
    /// The params object was missing fields or had the wrong types.
    #[error("Malformed JSON: Could not decode the request body. The JSON was formatted incorrectly. ({0})")]
    Malformed(String),

    /// A query was made without naming a reputee.
    #[error("A valid query is required.")]
    MissingQuery,

    /// No stored repute names the requested reputee.
    #[error("Reputee could not be found.")]
    ReputeeNotFound,

    /// The store or engine failed.
    #[error("{0}")]
    Internal(#[from] CloutError),
}

impl From<RpcError> for String {
    fn from(e: RpcError) -> Self {
        e.to_string()
    }
}
