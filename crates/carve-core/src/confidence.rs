//! Confidence aggregation across dimensions.

use crate::config::DimensionWeights;
use crate::models::{Confidence, DimensionScore};

/// Combines one asset's dimension scores into a single confidence value.
pub struct ConfidenceCalculator {
    weights: DimensionWeights,
}

impl ConfidenceCalculator {
    /// Creates a calculator over validated weights.
    pub fn new(weights: DimensionWeights) -> Self {
        Self { weights }
    }

    /// Weighted mean over the dimensions that actually carry a score.
    ///
    /// Weights renormalize over the present dimensions, so an asset scored on
    /// two of four dimensions is not penalized for the missing data. Returns
    /// `None` when no scores are present; such assets are excluded from
    /// output entirely rather than scored as zero.
    pub fn confidence(&self, scores: &[DimensionScore]) -> Option<Confidence> {
        let first = scores.first()?;

        let mut weight_total = 0.0;
        let mut weighted_sum = 0.0;
        let mut contributing = Vec::with_capacity(scores.len());
        for score in scores {
            let weight = self.weights.weight(score.dimension);
            weight_total += weight;
            weighted_sum += score.value * weight;
            contributing.push(score.dimension);
        }
        contributing.sort_unstable();
        contributing.dedup();

        Some(Confidence {
            asset_id: first.asset_id.clone(),
            value: (weighted_sum / weight_total).clamp(0.0, 1.0),
            contributing_dimensions: contributing,
        })
    }
}
