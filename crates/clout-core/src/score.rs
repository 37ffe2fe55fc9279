// crates/clout-core/src/score.rs
//
// Derived score types. These are recomputed from the full record set on every
// query and never persisted.

use serde::{Deserialize, Serialize};

/// A score together with the confidence the sample count supports.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureScore {
    /// Mean rating (or blended rating for clout).
    pub score: f64,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}

impl FeatureScore {
    /// A score with no supporting samples.
    pub const ZERO: FeatureScore = FeatureScore {
        score: 0.0,
        confidence: 0.0,
    };

    pub fn new(score: f64, confidence: f64) -> Self {
        Self { score, confidence }
    }
}

/// The full reputation of a reputee: blended clout plus both feature scores.
///
/// Field order matches the response body:
/// `{"reputee", "clout", "reach", "clarity"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reputation {
    pub reputee: String,
    pub clout: FeatureScore,
    pub reach: FeatureScore,
    pub clarity: FeatureScore,
}
