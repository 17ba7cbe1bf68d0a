//! Derived score records.

use crate::models::{AssetId, Dimension};
use serde::{Deserialize, Serialize};

/// Normalized non-core score for one asset along one dimension.
///
/// One exists per asset per dimension; re-ingesting a dimension's signals
/// replaces the score on the next evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    /// Asset the score belongs to.
    pub asset_id: AssetId,
    /// Dimension the score was computed for.
    pub dimension: Dimension,
    /// Normalized non-core score in [0, 1].
    pub value: f64,
    /// Number of signals merged into this score.
    pub signal_count: usize,
}

/// Aggregated likelihood that an asset is non-core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    /// Asset the confidence applies to.
    pub asset_id: AssetId,
    /// Weight-renormalized mean of the present dimension scores, in [0, 1].
    pub value: f64,
    /// Dimensions that carried a score, in canonical order.
    pub contributing_dimensions: Vec<Dimension>,
}
