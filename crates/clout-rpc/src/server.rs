// crates/clout-rpc/src/server.rs
//
// RPC server setup: CloutRpcServer and RpcConfig.
//
// A single tonic service accepts JSON-encoded `{method, params}` requests over
// HTTP/1.1 or HTTP/2, dispatches to the matching handler, and answers with a
// JSON `{success, result, error}` envelope. Every request, including ones
// that fail, gets an HTTP 200 with the outcome in the envelope.

use std::sync::Arc;
use std::time::Instant;

use http_body::Body as HttpBody;
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use tonic::transport::Server;
use tonic::Status;

use clout_core::traits::ReputeStore;
use clout_reputation::ScoringEngine;

use crate::error::RpcError;
use crate::handlers;
use crate::middleware;

// ---------------------------------------------------------------------------
// RpcConfig
// ---------------------------------------------------------------------------

/// Configuration for the RPC server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Host to bind to (e.g., "127.0.0.1" or "0.0.0.0").
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 50051,
        }
    }
}

// ---------------------------------------------------------------------------
// JSON-RPC Envelope
// ---------------------------------------------------------------------------

/// A JSON-RPC-style request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// The RPC method to invoke (e.g., "reputation/submit").
    pub method: String,
    /// JSON-encoded parameters for the method.
    #[serde(default)]
    pub params: serde_json::Value,
}

impl JsonRpcRequest {
    pub fn new(method: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}

/// A JSON-RPC-style response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Whether the request succeeded.
    pub success: bool,
    /// The result data (if success).
    pub result: Option<serde_json::Value>,
    /// Error message (if not success).
    pub error: Option<String>,
}

impl JsonRpcResponse {
    fn ok(value: serde_json::Value) -> Self {
        Self {
            success: true,
            result: Some(value),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(message.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// CloutRpcServer
// ---------------------------------------------------------------------------

/// The RPC server for the Clout reputation service.
///
/// Holds the shared repute store and scoring engine and exposes them through
/// a tonic server with JSON-RPC dispatching.
#[derive(Clone)]
pub struct CloutRpcServer {
    config: RpcConfig,
    service: ReputationService,
}

impl std::fmt::Debug for CloutRpcServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloutRpcServer")
            .field("config", &self.config)
            .field("scoring", self.service.engine.config())
            .finish()
    }
}

impl CloutRpcServer {
    /// Create a new CloutRpcServer.
    ///
    /// # Arguments
    /// * `config` - Server configuration (host, port).
    /// * `store` - Shared repute store.
    /// * `engine` - Scoring engine used for reputation queries.
    pub fn new(config: RpcConfig, store: Arc<dyn ReputeStore>, engine: ScoringEngine) -> Self {
        Self {
            config,
            service: ReputationService {
                store,
                engine: Arc::new(engine),
                start_time: None,
            },
        }
    }

    /// Set the daemon start time for uptime reporting.
    pub fn with_start_time(mut self, st: Instant) -> Self {
        self.service.start_time = Some(st);
        self
    }

    /// Dispatch a single request without going through the transport.
    pub async fn handle(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        self.service.dispatch(request).await
    }

    /// Start the RPC server and listen for requests.
    ///
    /// Binds to the configured address and serves requests until the process
    /// is terminated.
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = format!("{}:{}", self.config.host, self.config.port).parse()?;

        tracing::info!("Clout RPC server starting on {}", addr);

        Server::builder()
            .accept_http1(true)
            .add_service(tonic::service::interceptor::InterceptedService::new(
                CloutJsonRpcServer::new(self.service.clone()),
                middleware::logging_interceptor,
            ))
            .serve(addr)
            .await?;

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Shared state behind the transport, dispatching calls to handlers.
#[derive(Clone)]
struct ReputationService {
    store: Arc<dyn ReputeStore>,
    engine: Arc<ScoringEngine>,
    start_time: Option<Instant>,
}

impl ReputationService {
    /// Dispatch a JSON-RPC request to the appropriate handler based on the method name.
    async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let result = match request.method.as_str() {
            "reputation/submit" => {
                let store = self.store.clone();
                dispatch_handler(request.params, |r| async move {
                    handlers::reputation::handle_submit_repute(store.as_ref(), r).await
                })
                .await
            }
            "reputation/get" => {
                let store = self.store.clone();
                let engine = self.engine.clone();
                dispatch_handler(request.params, |r| async move {
                    handlers::reputation::handle_get_reputation(store.as_ref(), &engine, r).await
                })
                .await
            }
            "node/health" => {
                let store = self.store.clone();
                let start_time = self.start_time;
                dispatch_handler(request.params, |r| async move {
                    handlers::node::handle_get_health(store.as_ref(), r, start_time).await
                })
                .await
            }
            _ => Err(format!("Unknown method: {}", request.method)),
        };

        match result {
            Ok(value) => JsonRpcResponse::ok(value),
            Err(err) => {
                tracing::debug!(method = %request.method, error = %err, "RPC call failed");
                JsonRpcResponse::err(err)
            }
        }
    }
}

/// Generic dispatch helper: deserialize params into a request type,
/// call the handler, and serialize the result to JSON. Absent or null params
/// decode as an empty object.
async fn dispatch_handler<Req, Resp, F, Fut>(
    params: serde_json::Value,
    handler: F,
) -> Result<serde_json::Value, String>
where
    Req: serde::de::DeserializeOwned,
    Resp: serde::Serialize,
    F: FnOnce(Req) -> Fut,
    Fut: std::future::Future<Output = Result<Resp, String>>,
{
    let params = match params {
        serde_json::Value::Null => serde_json::Value::Object(serde_json::Map::new()),
        other => other,
    };
    let request: Req =
        serde_json::from_value(params).map_err(|e| RpcError::Malformed(e.to_string()))?;
    let response = handler(request).await?;
    serde_json::to_value(response).map_err(|e| format!("Failed to serialize response: {}", e))
}

// ---------------------------------------------------------------------------
// Tonic Service Wiring
// ---------------------------------------------------------------------------
// One service, any path: the body is a JSON-encoded JsonRpcRequest and the
// reply a JSON-encoded JsonRpcResponse.

/// The tonic service wrapper. Accepts raw bodies, decodes the JSON-RPC
/// envelope, and dispatches.
#[derive(Clone)]
pub struct CloutJsonRpcServer {
    inner: ReputationService,
}

impl std::fmt::Debug for CloutJsonRpcServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloutJsonRpcServer").finish()
    }
}

impl CloutJsonRpcServer {
    fn new(inner: ReputationService) -> Self {
        Self { inner }
    }
}

impl tonic::server::NamedService for CloutJsonRpcServer {
    const NAME: &'static str = "clout.rpc.ReputationService";
}

impl<B> tower_service::Service<http::Request<B>> for CloutJsonRpcServer
where
    B: HttpBody + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>> + Send,
    B::Data: Send,
{
    type Response = http::Response<tonic::body::BoxBody>;
    type Error = std::convert::Infallible;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let inner = self.inner.clone();

        Box::pin(async move {
            let body_bytes = match collect_body(req.into_body()).await {
                Ok(b) => b,
                Err(e) => {
                    tracing::error!("Failed to read request body: {}", e);
                    return Ok(envelope_response(&JsonRpcResponse::err(
                        "A valid JSON document is required.",
                    )));
                }
            };

            if body_bytes.is_empty() {
                return Ok(envelope_response(&JsonRpcResponse::err(
                    "A valid JSON document is required.",
                )));
            }

            let rpc_request: JsonRpcRequest = match serde_json::from_slice(&body_bytes) {
                Ok(r) => r,
                Err(e) => {
                    return Ok(envelope_response(&JsonRpcResponse::err(format!(
                        "Malformed JSON: Could not decode the request body. The JSON was incorrect or not encoded as UTF-8. ({})",
                        e
                    ))));
                }
            };

            let rpc_response = inner.dispatch(rpc_request).await;
            Ok(envelope_response(&rpc_response))
        })
    }
}

/// Collect the body of an HTTP request into bytes.
async fn collect_body<B>(body: B) -> Result<Vec<u8>, String>
where
    B: HttpBody + Send,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    B::Data: Send,
{
    match body.collect().await {
        Ok(collected) => Ok(collected.to_bytes().to_vec()),
        Err(e) => {
            let err: Box<dyn std::error::Error + Send + Sync> = e.into();
            Err(err.to_string())
        }
    }
}

/// Serialize an envelope into an HTTP 200 JSON response.
fn envelope_response(envelope: &JsonRpcResponse) -> http::Response<tonic::body::BoxBody> {
    let json = serde_json::to_vec(envelope).unwrap_or_default();
    let body = tonic::body::BoxBody::new(
        http_body_util::Full::new(bytes::Bytes::from(json))
            .map_err(|e| Status::internal(format!("body error: {}", e))),
    );

    let mut response = http::Response::new(body);
    response.headers_mut().insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static("application/json"),
    );
    response
}
