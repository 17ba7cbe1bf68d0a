//! Analysis configuration.
//!
//! Every scoring knob lives here as a named field. A configuration is
//! validated once when the engine is built and never mutated mid-run.

use crate::error::ConfigError;
use crate::models::Dimension;
use serde::{Deserialize, Serialize};

/// Relative weight of each dimension in the confidence mean.
///
/// Weights need not sum to 1; the confidence calculator renormalizes over
/// whichever dimensions are present for an asset. Each weight must be
/// strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionWeights {
    /// Weight of financial evidence.
    pub financial: f64,
    /// Weight of operational evidence.
    pub operational: f64,
    /// Weight of industry benchmark evidence.
    pub industry: f64,
    /// Weight of historical context evidence.
    pub historical: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            financial: 1.0,
            operational: 1.0,
            industry: 1.5,
            historical: 1.2,
        }
    }
}

impl DimensionWeights {
    /// Returns the weight configured for a dimension.
    pub fn weight(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Financial => self.financial,
            Dimension::Operational => self.operational,
            Dimension::Industry => self.industry,
            Dimension::Historical => self.historical,
        }
    }

    /// Sum of all four weights.
    pub fn total(&self) -> f64 {
        self.financial + self.operational + self.industry + self.historical
    }

    /// Validates that every weight is positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for dimension in Dimension::ALL {
            let value = self.weight(dimension);
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveWeight {
                    dimension: dimension.as_str(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Confidence floors for each non-core tier.
///
/// An asset's tier is the highest floor its confidence clears, boundaries
/// inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Floor for `non_core_high`.
    pub high: f64,
    /// Floor for `non_core_medium`.
    pub medium: f64,
    /// Floor for `non_core_low`.
    pub low: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: 0.80,
            medium: 0.65,
            low: 0.50,
        }
    }
}

impl TierThresholds {
    /// Validates range and ordering of the floors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("high", self.high),
            ("medium", self.medium),
            ("low", self.low),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::TierOutOfRange { name, value });
            }
        }
        if self.high < self.medium || self.medium < self.low {
            return Err(ConfigError::TierOrdering {
                high: self.high,
                medium: self.medium,
                low: self.low,
            });
        }
        Ok(())
    }
}

/// Flag floors and age windows used by extractors and signal normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringThresholds {
    /// Utilization below which a financial asset is flagged.
    pub low_utilization: f64,
    /// Revenue contribution below which an asset is considered marginal.
    pub revenue_contribution: f64,
    /// Profit margin below which a subsidiary is considered marginal.
    pub profit_margin: f64,
    /// Occupancy below which a property is flagged.
    pub occupancy: f64,
    /// Utilization below which a production facility is flagged.
    pub facility_utilization: f64,
    /// Utilization below which a distribution center is flagged.
    pub warehouse_utilization: f64,
    /// Usage rate below which a technology platform is flagged.
    pub technology_usage: f64,
    /// Fraction of the industry benchmark below which performance is flagged.
    pub performance: f64,
    /// Relative deviation treated as significant in benchmark comparisons.
    pub significant_deviation: f64,
    /// Idle years after which equipment counts as fully dormant.
    pub equipment_idle_years: u32,
    /// Years after which an acquisition is expected to be integrated.
    pub integration_years: u32,
    /// Market relevance grade below which an asset is flagged.
    pub market_relevance: f64,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            low_utilization: 0.50,
            revenue_contribution: 0.05,
            profit_margin: 0.10,
            occupancy: 0.70,
            facility_utilization: 0.60,
            warehouse_utilization: 0.65,
            technology_usage: 0.40,
            performance: 0.75,
            significant_deviation: 0.20,
            equipment_idle_years: 5,
            integration_years: 3,
            market_relevance: 0.60,
        }
    }
}

impl ScoringThresholds {
    /// Validates that ratios sit in (0, 1] and windows span at least a year.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("low_utilization", self.low_utilization),
            ("revenue_contribution", self.revenue_contribution),
            ("profit_margin", self.profit_margin),
            ("occupancy", self.occupancy),
            ("facility_utilization", self.facility_utilization),
            ("warehouse_utilization", self.warehouse_utilization),
            ("technology_usage", self.technology_usage),
            ("performance", self.performance),
            ("significant_deviation", self.significant_deviation),
            ("market_relevance", self.market_relevance),
        ] {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(ConfigError::ScoringOutOfRange { name, value });
            }
        }
        for (name, value) in [
            ("equipment_idle_years", self.equipment_idle_years),
            ("integration_years", self.integration_years),
        ] {
            if value < 1 {
                return Err(ConfigError::WindowTooShort { name, value });
            }
        }
        Ok(())
    }
}

/// Immutable configuration for one analysis engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Per-dimension confidence weights.
    #[serde(default)]
    pub weights: DimensionWeights,
    /// Tier floors for classification.
    #[serde(default)]
    pub tiers: TierThresholds,
    /// Cutoff applied when the caller does not supply one.
    #[serde(default = "default_cutoff")]
    pub default_cutoff: f64,
    /// Extractor flag floors and normalization parameters.
    #[serde(default)]
    pub scoring: ScoringThresholds,
    /// Maximum number of candidates carried into a report.
    #[serde(default = "default_max_assets")]
    pub max_assets: usize,
}

fn default_cutoff() -> f64 {
    0.60
}

fn default_max_assets() -> usize {
    50
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            weights: DimensionWeights::default(),
            tiers: TierThresholds::default(),
            default_cutoff: default_cutoff(),
            scoring: ScoringThresholds::default(),
            max_assets: default_max_assets(),
        }
    }
}

impl AnalysisConfig {
    /// Validates the whole configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.tiers.validate()?;
        self.scoring.validate()?;
        if !self.default_cutoff.is_finite() || !(0.0..=1.0).contains(&self.default_cutoff) {
            return Err(ConfigError::CutoffOutOfRange(self.default_cutoff));
        }
        if self.max_assets == 0 {
            return Err(ConfigError::ZeroMaxAssets);
        }
        Ok(())
    }

    /// Replaces the dimension weights.
    pub fn with_weights(mut self, weights: DimensionWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replaces the tier floors.
    pub fn with_tiers(mut self, tiers: TierThresholds) -> Self {
        self.tiers = tiers;
        self
    }

    /// Replaces the default cutoff.
    pub fn with_default_cutoff(mut self, cutoff: f64) -> Self {
        self.default_cutoff = cutoff;
        self
    }

    /// Replaces the scoring thresholds.
    pub fn with_scoring(mut self, scoring: ScoringThresholds) -> Self {
        self.scoring = scoring;
        self
    }

    /// Replaces the report asset cap.
    pub fn with_max_assets(mut self, max_assets: usize) -> Self {
        self.max_assets = max_assets;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_cutoff, 0.60);
        assert_eq!(config.max_assets, 50);
    }

    #[test]
    fn test_default_weights() {
        let weights = DimensionWeights::default();
        assert_eq!(weights.financial, 1.0);
        assert_eq!(weights.industry, 1.5);
        assert_eq!(weights.historical, 1.2);
        assert!((weights.total() - 4.7).abs() < 1e-9);
    }

    #[test]
    fn test_weight_lookup() {
        let weights = DimensionWeights::default();
        assert_eq!(weights.weight(Dimension::Industry), 1.5);
        assert_eq!(weights.weight(Dimension::Operational), 1.0);
    }

    #[test]
    fn test_zero_weight_rejected() {
        let config = AnalysisConfig::default().with_weights(DimensionWeights {
            financial: 0.0,
            ..DimensionWeights::default()
        });
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveWeight {
                dimension: "financial",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_tier_ordering_rejected() {
        let config = AnalysisConfig::default().with_tiers(TierThresholds {
            high: 0.6,
            medium: 0.7,
            low: 0.5,
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TierOrdering { .. })
        ));
    }

    #[test]
    fn test_tier_range_rejected() {
        let config = AnalysisConfig::default().with_tiers(TierThresholds {
            high: 1.2,
            medium: 0.65,
            low: 0.5,
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TierOutOfRange { name: "high", .. })
        ));
    }

    #[test]
    fn test_cutoff_range_rejected() {
        let config = AnalysisConfig::default().with_default_cutoff(1.5);
        assert_eq!(config.validate(), Err(ConfigError::CutoffOutOfRange(1.5)));
    }

    #[test]
    fn test_scoring_threshold_rejected() {
        let mut scoring = ScoringThresholds::default();
        scoring.revenue_contribution = 0.0;
        let config = AnalysisConfig::default().with_scoring(scoring);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ScoringOutOfRange {
                name: "revenue_contribution",
                ..
            })
        ));
    }

    #[test]
    fn test_idle_window_rejected() {
        let mut scoring = ScoringThresholds::default();
        scoring.equipment_idle_years = 0;
        let config = AnalysisConfig::default().with_scoring(scoring);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WindowTooShort {
                name: "equipment_idle_years",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_max_assets_rejected() {
        let config = AnalysisConfig::default().with_max_assets(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxAssets));
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let json = r#"{"default_cutoff": 0.7}"#;
        let config: AnalysisConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.default_cutoff, 0.7);
        assert_eq!(config.weights, DimensionWeights::default());
        assert_eq!(config.scoring, ScoringThresholds::default());
    }
}
