// crates/clout-rpc/src/middleware.rs
//
// Request logging for the RPC server.

use tonic::{Request, Status};

/// Logging interceptor for incoming requests.
///
/// Records the request metadata at debug level; method-level outcomes are
/// logged by the handlers themselves.
pub fn logging_interceptor(req: Request<()>) -> Result<Request<()>, Status> {
    tracing::debug!("Incoming RPC request: {:?}", req.metadata());
    Ok(req)
}
