// crates/clout-reputation/src/confidence.rs
//
// Sample-count confidence for feature scores.
//
// Confidence follows a quadratic ease-in/ease-out curve between two sample
// counts: zero at or below `min`, exactly 0.5 at the midpoint, one at or
// above `max`.

use serde::{Deserialize, Serialize};

use clout_core::error::CloutError;
use clout_core::repute::Feature;

/// Smooth-step S-curve mapping a sample count to a confidence in [0, 1].
///
/// # Arguments
/// * `a` - Sample count at or below which confidence is 0.
/// * `b` - Sample count at or above which confidence is 1.
/// * `x` - The observed sample count.
///
/// # Returns
/// `2((x-a)/(b-a))^2` on the lower half, `1 - 2((x-b)/(b-a))^2` on the upper
/// half. The branches are tested in order, so `x == a` takes the zero branch
/// and `x == b` evaluates to exactly 1.
pub fn s_curve(a: f64, b: f64, x: f64) -> f64 {
    let mid = (a + b) / 2.0;
    if x <= a {
        0.0
    } else if x <= mid {
        2.0 * ((x - a) / (b - a)).powi(2)
    } else if x <= b {
        1.0 - 2.0 * ((x - b) / (b - a)).powi(2)
    } else {
        1.0
    }
}

/// Sample-count bounds for one feature's S-curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Sample count at or below which confidence is 0.
    pub min: f64,
    /// Sample count at or above which confidence is 1.
    pub max: f64,
}

impl Thresholds {
    /// Default reach bounds: confidence starts after 2 reputes, saturates at 6.
    pub const REACH: Thresholds = Thresholds { min: 2.0, max: 6.0 };

    /// Default clarity bounds: confidence starts after 4 reputes, saturates at 8.
    pub const CLARITY: Thresholds = Thresholds { min: 4.0, max: 8.0 };

    /// Create validated thresholds.
    pub fn new(min: f64, max: f64) -> Result<Self, CloutError> {
        let t = Self { min, max };
        t.validate()?;
        Ok(t)
    }

    /// Both bounds must be finite, `min` must not be negative, and `min < max`.
    pub fn validate(&self) -> Result<(), CloutError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(CloutError::Config(format!(
                "Thresholds must be finite, got ({}, {})",
                self.min, self.max
            )));
        }
        if self.min < 0.0 {
            return Err(CloutError::Config(format!(
                "Threshold min ({}) must not be negative",
                self.min
            )));
        }
        if self.min >= self.max {
            return Err(CloutError::Config(format!(
                "Threshold min ({}) must be below max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// The sample count at which confidence is exactly 0.5.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Confidence for `samples` matching reputes.
    pub fn confidence(&self, samples: usize) -> f64 {
        s_curve(self.min, self.max, samples as f64)
    }
}

/// Per-feature S-curve bounds, the `[scoring]` table of the daemon config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_reach")]
    pub reach: Thresholds,

    #[serde(default = "default_clarity")]
    pub clarity: Thresholds,
}

fn default_reach() -> Thresholds {
    Thresholds::REACH
}

fn default_clarity() -> Thresholds {
    Thresholds::CLARITY
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            reach: default_reach(),
            clarity: default_clarity(),
        }
    }
}

impl ScoringConfig {
    /// Bounds for the given feature.
    pub fn thresholds(&self, feature: Feature) -> Thresholds {
        match feature {
            Feature::Reach => self.reach,
            Feature::Clarity => self.clarity,
        }
    }

    /// Validate every feature's bounds.
    pub fn validate(&self) -> Result<(), CloutError> {
        for feature in Feature::ALL {
            self.thresholds(feature)
                .validate()
                .map_err(|e| CloutError::Config(format!("{} thresholds: {}", feature, e)))?;
        }
        Ok(())
    }
}
