// crates/clout-rpc/src/handlers/node.rs
//
// Node handlers: GetHealth.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use clout_core::traits::ReputeStore;

use crate::error::RpcError;

/// Request for node health (no parameters).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthRequest {}

/// Node health summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the store could be scanned.
    pub status: String,
    /// Number of stored reputes.
    pub records: usize,
    /// Seconds since the server was constructed, if known.
    pub uptime_secs: Option<u64>,
}

/// Handle a GetHealth request. A store failure is reported as an error.
pub async fn handle_get_health(
    store: &dyn ReputeStore,
    _request: HealthRequest,
    start_time: Option<Instant>,
) -> Result<HealthResponse, String> {
    let records = store.iterate().await.map_err(RpcError::from)?.len();

    Ok(HealthResponse {
        status: "ok".to_string(),
        records,
        uptime_secs: start_time.map(|t| t.elapsed().as_secs()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clout_core::ReputeRecord;
    use clout_store::InMemoryStore;

    #[tokio::test]
    async fn test_health_counts_records() {
        let store = InMemoryStore::new();
        let r = ReputeRecord::new("a", "b", "r1", "reach", 1.0);
        store.insert_if_absent(&r.storage_key(), &r).await.unwrap();

        let resp = handle_get_health(&store, HealthRequest {}, Some(Instant::now()))
            .await
            .unwrap();
        assert_eq!(resp.status, "ok");
        assert_eq!(resp.records, 1);
        assert_eq!(resp.uptime_secs, Some(0));
    }
}
