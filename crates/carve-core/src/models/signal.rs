//! Signals emitted by the dimension extractors.
//!
//! A signal is one indicator of non-core-ness for one asset. The indicator
//! kind fixes how the raw value is normalized into a score; the dimension
//! groups signals for scoring and confidence weighting.

use crate::config::ScoringThresholds;
use crate::error::SignalError;
use crate::models::AssetId;
use serde::{Deserialize, Serialize};

/// Analytical dimension a signal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Balance sheet and revenue evidence.
    Financial,
    /// Capacity and usage evidence.
    Operational,
    /// Performance relative to industry benchmarks.
    Industry,
    /// Acquisition history and market relevance.
    Historical,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Financial,
        Dimension::Operational,
        Dimension::Industry,
        Dimension::Historical,
    ];

    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Financial => "financial",
            Dimension::Operational => "operational",
            Dimension::Industry => "industry",
            Dimension::Historical => "historical",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Indicator carried by a signal.
///
/// The kind fixes the normalization applied by the scorer; every kind maps
/// monotonically so that a worse raw reading yields a higher non-core score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Fraction of capacity in active use.
    Utilization,
    /// Share of company revenue attributable to the asset.
    RevenueContribution,
    /// Profit margin of the asset or subsidiary.
    ProfitMargin,
    /// Normalized shortfall against an industry benchmark.
    BenchmarkShortfall,
    /// Market relevance grade of the asset's segment.
    MarketRelevance,
    /// Distance from full integration of an acquisition or investment.
    IntegrationShortfall,
    /// Fraction of the idle window the asset has sat unused.
    Dormancy,
}

impl SignalKind {
    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Utilization => "utilization",
            SignalKind::RevenueContribution => "revenue_contribution",
            SignalKind::ProfitMargin => "profit_margin",
            SignalKind::BenchmarkShortfall => "benchmark_shortfall",
            SignalKind::MarketRelevance => "market_relevance",
            SignalKind::IntegrationShortfall => "integration_shortfall",
            SignalKind::Dormancy => "dormancy",
        }
    }

    /// Maps a validated raw value onto a non-core score.
    ///
    /// Active-use indicators invert the value, contribution indicators
    /// measure the distance below the configured floor, and shortfall
    /// indicators pass through unchanged.
    pub fn normalize(&self, value: f64, thresholds: &ScoringThresholds) -> f64 {
        let score = match self {
            SignalKind::Utilization | SignalKind::MarketRelevance => 1.0 - value,
            SignalKind::RevenueContribution => {
                shortfall_below(value, thresholds.revenue_contribution)
            }
            SignalKind::ProfitMargin => shortfall_below(value, thresholds.profit_margin),
            SignalKind::BenchmarkShortfall
            | SignalKind::IntegrationShortfall
            | SignalKind::Dormancy => value,
        };
        score.clamp(0.0, 1.0)
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Distance below `floor`, as a fraction of the floor.
fn shortfall_below(value: f64, floor: f64) -> f64 {
    (floor - value).max(0.0) / floor
}

/// A single indicator of non-core-ness for one asset along one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Asset the indicator applies to.
    pub asset_id: AssetId,
    /// Dimension the indicator belongs to.
    pub dimension: Dimension,
    /// What the raw value measures.
    pub kind: SignalKind,
    /// Raw indicator value, expected in [0, 1].
    pub value: f64,
    /// Merge weight relative to other signals in the same dimension.
    #[serde(default = "default_signal_weight")]
    pub weight: f64,
}

fn default_signal_weight() -> f64 {
    1.0
}

impl Signal {
    /// Creates a signal with unit weight.
    pub fn new(
        asset_id: impl Into<AssetId>,
        dimension: Dimension,
        kind: SignalKind,
        value: f64,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            dimension,
            kind,
            value,
            weight: default_signal_weight(),
        }
    }

    /// Sets the merge weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Checks that the raw value and weight are usable.
    pub fn validate(&self) -> Result<(), SignalError> {
        if !self.value.is_finite() || !(0.0..=1.0).contains(&self.value) {
            return Err(SignalError::ValueOutOfRange {
                kind: self.kind,
                value: self.value,
            });
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(SignalError::InvalidWeight {
                weight: self.weight,
            });
        }
        Ok(())
    }
}
