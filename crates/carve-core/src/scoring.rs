//! Signal scoring.
//!
//! The scorer merges one asset's signals into a normalized score per
//! dimension. Normalization is fixed by each signal's kind; signals sharing
//! a dimension merge by weighted mean.

use crate::config::ScoringThresholds;
use crate::error::SignalError;
use crate::models::{AssetId, Dimension, DimensionScore, Signal};
use std::collections::BTreeMap;
use tracing::warn;

/// A signal dropped during validation, with the dimension it excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedSignal {
    /// Asset whose dimension was excluded.
    pub asset_id: AssetId,
    /// Dimension that produced no score because of the rejection.
    pub dimension: Dimension,
    /// Why the signal failed validation.
    pub reason: SignalError,
}

/// Outcome of scoring one asset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSet {
    /// One score per dimension that validated cleanly.
    pub scores: Vec<DimensionScore>,
    /// Signals dropped during validation.
    pub rejected: Vec<RejectedSignal>,
}

/// Normalizes and merges signals into per-dimension scores.
pub struct AssetScorer {
    thresholds: ScoringThresholds,
}

impl AssetScorer {
    /// Creates a scorer over the given thresholds.
    pub fn new(thresholds: ScoringThresholds) -> Self {
        Self { thresholds }
    }

    /// Scores one asset's signals.
    ///
    /// A dimension containing any invalid signal is excluded entirely; the
    /// remaining dimensions still produce scores. Missing dimensions stay
    /// absent, with no imputation.
    pub fn score_asset(&self, asset_id: &AssetId, signals: &[&Signal]) -> ScoreSet {
        let mut by_dimension: BTreeMap<Dimension, Vec<&Signal>> = BTreeMap::new();
        for signal in signals {
            by_dimension.entry(signal.dimension).or_default().push(signal);
        }

        let mut outcome = ScoreSet::default();
        for (dimension, group) in by_dimension {
            if let Some(reason) = group.iter().find_map(|signal| signal.validate().err()) {
                warn!(
                    asset_id = %asset_id,
                    dimension = %dimension,
                    %reason,
                    "invalid signal, excluding dimension for this asset"
                );
                outcome.rejected.push(RejectedSignal {
                    asset_id: asset_id.clone(),
                    dimension,
                    reason,
                });
                continue;
            }

            let weight_total: f64 = group.iter().map(|signal| signal.weight).sum();
            let weighted_sum: f64 = group
                .iter()
                .map(|signal| signal.kind.normalize(signal.value, &self.thresholds) * signal.weight)
                .sum();

            outcome.scores.push(DimensionScore {
                asset_id: asset_id.clone(),
                dimension,
                value: (weighted_sum / weight_total).clamp(0.0, 1.0),
                signal_count: group.len(),
            });
        }
        outcome
    }
}
