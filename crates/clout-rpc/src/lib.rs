// crates/clout-rpc/src/lib.rs
//
// clout-rpc: JSON-RPC server and handlers for the Clout reputation service.
//
// A single tonic-hosted HTTP endpoint accepts JSON envelopes naming a method,
// dispatches to the repute ingest and reputation query handlers, and returns
// JSON envelopes. No protobuf codegen is involved.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;

// Re-export the main server types for ergonomic access.
pub use error::RpcError;
pub use server::{CloutRpcServer, JsonRpcRequest, JsonRpcResponse, RpcConfig};
