// crates/clout-reputation/src/engine.rs
//
// Scoring engine: reduces a reputee's reputes into reach, clarity, and clout.
//
// Every query is one full scan of the store followed by a pure computation
// over the snapshot. Nothing is cached between calls.

use clout_core::error::CloutError;
use clout_core::repute::{Feature, ReputeRecord};
use clout_core::score::{FeatureScore, Reputation};
use clout_core::traits::ReputeStore;

use crate::confidence::ScoringConfig;

/// Clout scores are reported on a tenth of the rating scale.
const CLOUT_SCALE: f64 = 10.0;

/// Stateless scorer parameterized by per-feature S-curve bounds.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Create an engine with validated thresholds.
    pub fn new(config: ScoringConfig) -> Result<Self, CloutError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scan `store` once and score `reputee`.
    ///
    /// Callers check that the reputee exists first; for an unknown reputee
    /// this returns all-zero scores.
    pub async fn compute<S>(&self, store: &S, reputee: &str) -> Result<Reputation, CloutError>
    where
        S: ReputeStore + ?Sized,
    {
        let records = store.iterate().await?;
        Ok(self.score(reputee, &records))
    }

    /// Score `reputee` against a snapshot of records.
    pub fn score(&self, reputee: &str, records: &[ReputeRecord]) -> Reputation {
        let reach = self.feature_score(reputee, records, Feature::Reach);
        let clarity = self.feature_score(reputee, records, Feature::Clarity);
        let clout = blend_clout(reach, clarity);

        tracing::debug!(
            reputee,
            reach = ?reach,
            clarity = ?clarity,
            clout = ?clout,
            "Scored reputee"
        );

        Reputation {
            reputee: reputee.to_string(),
            clout,
            reach,
            clarity,
        }
    }

    /// Mean rating and S-curve confidence of one feature for `reputee`.
    pub fn feature_score(
        &self,
        reputee: &str,
        records: &[ReputeRecord],
        feature: Feature,
    ) -> FeatureScore {
        let mut values: Vec<f64> = records
            .iter()
            .filter(|r| r.rates(reputee, feature))
            .map(|r| r.repute.value)
            .collect();

        let n = values.len();
        if n == 0 {
            return FeatureScore::ZERO;
        }
        let confidence = self.config.thresholds(feature).confidence(n);

        // Sum in a fixed order so the mean does not depend on scan order.
        values.sort_by(f64::total_cmp);
        let mean = values.iter().sum::<f64>() / n as f64;
        FeatureScore::new(mean, confidence)
    }
}

/// Blend reach and clarity into clout.
///
/// Each feature's score is weighted by its share of the combined confidence,
/// and the blend is scaled down by 10. Clout confidence is the weaker of the
/// two confidences. When both confidences are zero there is nothing to
/// weight, and clout is `(0, 0)`.
pub fn blend_clout(reach: FeatureScore, clarity: FeatureScore) -> FeatureScore {
    let total = reach.confidence + clarity.confidence;
    if total == 0.0 {
        return FeatureScore::ZERO;
    }

    let reach_weight = reach.confidence / total;
    let clarity_weight = clarity.confidence / total;
    let blended = clarity_weight * clarity.score + reach_weight * reach.score;

    FeatureScore::new(
        blended / CLOUT_SCALE,
        reach.confidence.min(clarity.confidence),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clout_store::InMemoryStore;

    fn reputes(reputee: &str, feature: &str, values: &[f64]) -> Vec<ReputeRecord> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                ReputeRecord::new("rater", reputee, format!("{}-{}", feature, i), feature, *v)
            })
            .collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn test_reference_scenario() {
        let mut records = reputes("Test", "clarity", &[10.0, 8.0, 8.0, 7.0, 9.0, 8.0]);
        records.extend(reputes("Test", "reach", &[4.0, 5.0, 4.0, 5.0]));

        let rep = ScoringEngine::default().score("Test", &records);

        assert!(close(rep.clarity.score, 8.3333333333));
        assert_eq!(rep.clarity.confidence, 0.5);
        assert_eq!(rep.reach.score, 4.5);
        assert_eq!(rep.reach.confidence, 0.5);
        assert!(close(rep.clout.score, 0.6416666667));
        assert_eq!(rep.clout.confidence, 0.5);
    }

    #[test]
    fn test_zero_samples_is_zero() {
        let records = reputes("Test", "clarity", &[9.0]);
        let reach = ScoringEngine::default().feature_score("Test", &records, Feature::Reach);
        assert_eq!(reach, FeatureScore::ZERO);
    }

    #[test]
    fn test_mean_without_confidence_below_min() {
        // Two reach reputes sit at the lower bound: a mean but no confidence.
        let records = reputes("Test", "reach", &[3.0, 6.0]);
        let reach = ScoringEngine::default().feature_score("Test", &records, Feature::Reach);
        assert_eq!(reach.score, 4.5);
        assert_eq!(reach.confidence, 0.0);
    }

    #[test]
    fn test_other_reputees_and_features_ignored() {
        let mut records = reputes("Test", "reach", &[4.0, 4.0, 4.0]);
        records.extend(reputes("Other", "reach", &[100.0; 5]));
        records.extend(reputes("Test", "charm", &[100.0; 5]));

        let reach = ScoringEngine::default().feature_score("Test", &records, Feature::Reach);
        assert_eq!(reach.score, 4.0);
        assert!(close(reach.confidence, 0.125));
    }

    #[test]
    fn test_degenerate_clout() {
        let clout = blend_clout(FeatureScore::new(5.0, 0.0), FeatureScore::new(9.0, 0.0));
        assert_eq!(clout, FeatureScore::ZERO);

        let rep = ScoringEngine::default().score("Nobody", &[]);
        assert_eq!(rep.clout, FeatureScore::ZERO);
        assert_eq!(rep.reach, FeatureScore::ZERO);
        assert_eq!(rep.clarity, FeatureScore::ZERO);
    }

    #[test]
    fn test_clout_weights_follow_confidence() {
        // Only reach carries confidence: clout is the reach score, scaled.
        let clout = blend_clout(FeatureScore::new(6.0, 1.0), FeatureScore::new(9.0, 0.0));
        assert!(close(clout.score, 0.6));
        assert_eq!(clout.confidence, 0.0);

        // Reach 0.25, clarity 0.75 -> (0.25*4 + 0.75*8) / 10 = 0.7
        let clout = blend_clout(FeatureScore::new(4.0, 0.25), FeatureScore::new(8.0, 0.75));
        assert!(close(clout.score, 0.7));
        assert_eq!(clout.confidence, 0.25);
    }

    #[test]
    fn test_scores_are_not_clamped() {
        let records = reputes("Test", "clarity", &[-20.0, 50.0, 1000.0, 2.0, 3.0, 7.0, 8.0, 0.0, 1.0]);
        let clarity = ScoringEngine::default().feature_score("Test", &records, Feature::Clarity);
        assert!(close(clarity.score, 1051.0 / 9.0));
        assert_eq!(clarity.confidence, 1.0);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = ScoringConfig {
            reach: crate::Thresholds::new(0.0, 2.0).unwrap(),
            ..ScoringConfig::default()
        };
        let engine = ScoringEngine::new(config).unwrap();
        let records = reputes("Test", "reach", &[5.0, 5.0]);
        assert_eq!(engine.feature_score("Test", &records, Feature::Reach).confidence, 1.0);
    }

    #[test]
    fn test_zero_samples_ignore_thresholds() {
        // Bounds below zero would give an empty feature confidence.
        let engine = ScoringEngine {
            config: ScoringConfig {
                reach: crate::Thresholds { min: -2.0, max: 2.0 },
                ..ScoringConfig::default()
            },
        };
        assert_eq!(engine.feature_score("Test", &[], Feature::Reach), FeatureScore::ZERO);

        let records = reputes("Test", "clarity", &[8.0; 8]);
        let rep = engine.score("Test", &records);
        assert_eq!(rep.reach, FeatureScore::ZERO);
        assert!(close(rep.clout.score, 0.8));
    }

    #[test]
    fn test_new_rejects_negative_thresholds() {
        let config = ScoringConfig {
            reach: crate::Thresholds { min: -2.0, max: 2.0 },
            ..ScoringConfig::default()
        };
        assert!(matches!(ScoringEngine::new(config), Err(CloutError::Config(_))));
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = ScoringConfig {
            clarity: crate::Thresholds { min: 8.0, max: 8.0 },
            ..ScoringConfig::default()
        };
        assert!(matches!(ScoringEngine::new(config), Err(CloutError::Config(_))));
    }

    #[test]
    fn test_scan_order_does_not_change_result() {
        let mut records = reputes("Test", "clarity", &[0.1, 0.7, 0.2, 9.3, 1e-9, 3.3]);
        records.extend(reputes("Test", "reach", &[0.3, 1.1, 2.9, 0.05]));
        let engine = ScoringEngine::default();
        let forward = engine.score("Test", &records);
        records.reverse();
        let backward = engine.score("Test", &records);
        assert_eq!(forward, backward);
    }

    #[tokio::test]
    async fn test_compute_from_store_is_deterministic() {
        let store = InMemoryStore::new();
        let mut records = reputes("Test", "clarity", &[10.0, 8.0, 8.0, 7.0, 9.0, 8.0]);
        records.extend(reputes("Test", "reach", &[4.0, 5.0, 4.0, 5.0]));
        for r in &records {
            store.insert_if_absent(&r.storage_key(), r).await.unwrap();
        }

        let engine = ScoringEngine::default();
        let first = engine.compute(&store, "Test").await.unwrap();
        let second = engine.compute(&store, "Test").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.reach.score, 4.5);
    }

    #[tokio::test]
    async fn test_duplicate_ingest_does_not_change_scores() {
        let store = InMemoryStore::new();
        for r in reputes("Test", "reach", &[4.0, 5.0, 4.0, 5.0]) {
            store.insert_if_absent(&r.storage_key(), &r).await.unwrap();
        }
        let engine = ScoringEngine::default();
        let before = engine.compute(&store, "Test").await.unwrap();

        // Same (rid, reputer, reputee) triple, different feature and value.
        let dup = ReputeRecord::new("rater", "Test", "reach-0", "clarity", 100.0);
        assert!(!store.insert_if_absent(&dup.storage_key(), &dup).await.unwrap());

        let after = engine.compute(&store, "Test").await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_compute_works_through_trait_object() {
        let store: std::sync::Arc<dyn ReputeStore> = std::sync::Arc::new(InMemoryStore::new());
        let r = ReputeRecord::new("rater", "Test", "r1", "reach", 2.0);
        store.insert_if_absent(&r.storage_key(), &r).await.unwrap();
        let rep = ScoringEngine::default().compute(store.as_ref(), "Test").await.unwrap();
        assert_eq!(rep.reach.score, 2.0);
    }
}
