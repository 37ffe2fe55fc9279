// crates/clout-rpc/src/handlers/reputation.rs
//
// Reputation handlers: SubmitRepute (ingest) and GetReputation (query).
// Ingest goes straight to the store's insert-if-absent; queries check that
// the reputee exists before handing off to the scoring engine.

use serde::{Deserialize, Serialize};

use clout_core::repute::{Repute, ReputeRecord};
use clout_core::score::Reputation;
use clout_core::traits::ReputeStore;
use clout_reputation::ScoringEngine;

use crate::error::RpcError;

// ---------------------------------------------------------------------------
// SubmitRepute
// ---------------------------------------------------------------------------

/// Request to record one endorsement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReputeRequest {
    /// Who is endorsing.
    pub reputer: String,
    /// Who is being endorsed.
    pub reputee: String,
    /// The rating: `{rid, feature, value}`.
    pub repute: Repute,
}

impl SubmitReputeRequest {
    fn into_record(self) -> ReputeRecord {
        ReputeRecord {
            reputer: self.reputer,
            reputee: self.reputee,
            repute: self.repute,
        }
    }
}

/// Response from submitting a repute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReputeResponse {
    /// `true` on first submission, `false` if the triple already existed.
    pub created: bool,
    /// Human-readable status message.
    pub message: String,
}

/// Handle a SubmitRepute request.
///
/// Both outcomes are successes: a new `(rid, reputer, reputee)` triple is
/// stored, an existing one is left untouched.
pub async fn handle_submit_repute(
    store: &dyn ReputeStore,
    request: SubmitReputeRequest,
) -> Result<SubmitReputeResponse, String> {
    let record = request.into_record();
    let key = record.storage_key();

    let created = store
        .insert_if_absent(&key, &record)
        .await
        .map_err(RpcError::from)?;

    let message = if created {
        tracing::info!(
            key = %key,
            feature = %record.repute.feature,
            "Recorded repute"
        );
        format!("rid-{} successfully created.", record.repute.rid)
    } else {
        tracing::debug!(key = %key, "Duplicate repute ignored");
        format!("rid-{} already exists.", record.repute.rid)
    };

    Ok(SubmitReputeResponse { created, message })
}

// ---------------------------------------------------------------------------
// GetReputation
// ---------------------------------------------------------------------------

/// Request for a reputee's reputation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetReputationRequest {
    /// The reputee to score.
    #[serde(default)]
    pub reputee: Option<String>,
}

/// Handle a GetReputation request.
///
/// Returns `{reputee, clout, reach, clarity}`. Fails if no reputee is named
/// or if no stored repute mentions it.
pub async fn handle_get_reputation(
    store: &dyn ReputeStore,
    engine: &ScoringEngine,
    request: GetReputationRequest,
) -> Result<Reputation, String> {
    let reputee = match request.reputee.as_deref() {
        Some(r) if !r.is_empty() => r,
        _ => return Err(RpcError::MissingQuery.into()),
    };

    let found = store
        .contains_reputee(reputee)
        .await
        .map_err(RpcError::from)?;
    if !found {
        tracing::debug!(reputee, "Reputation requested for unknown reputee");
        return Err(RpcError::ReputeeNotFound.into());
    }

    let reputation = engine
        .compute(store, reputee)
        .await
        .map_err(RpcError::from)?;
    Ok(reputation)
}
