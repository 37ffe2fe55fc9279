// crates/clout-reputation/src/lib.rs
//
// clout-reputation: Scoring engine for the Clout reputation service.
//
// Reduces a reputee's endorsements into per-feature means, derives a
// confidence for each from its sample count via an S-curve, and blends the
// two features into a single clout score.

pub mod confidence;
pub mod engine;

pub use confidence::{s_curve, ScoringConfig, Thresholds};
pub use engine::{blend_clout, ScoringEngine};
