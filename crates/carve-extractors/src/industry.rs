//! Industry benchmark extractor.
//!
//! Compares per-asset metric values against industry benchmarks and emits
//! shortfall signals for assets that significantly underperform. Findings
//! are graded by severity, which scales the signal weight so the deepest
//! deviations dominate the dimension merge.

use crate::dataset::CompanyDataset;
use crate::traits::{check_asset_id, ExtractorError, SignalExtractor};
use carve_core::{
    AnalysisConfig, Asset, AssetCategory, Dimension, Signal, SignalBatch, SignalKind,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Grade of a benchmark deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Grades a relative deviation from benchmark.
    pub fn from_deviation(deviation: f64) -> Self {
        if deviation <= -0.5 {
            Severity::Critical
        } else if deviation <= -0.3 {
            Severity::High
        } else if deviation <= -0.15 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    /// Signal weight applied to findings of this severity.
    pub fn signal_weight(&self) -> f64 {
        match self {
            Severity::Critical => 1.5,
            Severity::High => 1.25,
            Severity::Medium => 1.0,
            Severity::Low => 0.75,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Extracts industry signals from benchmark comparisons.
pub struct IndustryExtractor;

impl SignalExtractor for IndustryExtractor {
    fn dimension(&self) -> Dimension {
        Dimension::Industry
    }

    fn name(&self) -> &'static str {
        "industry"
    }

    fn extract(
        &self,
        dataset: &CompanyDataset,
        config: &AnalysisConfig,
    ) -> Result<SignalBatch, ExtractorError> {
        let thresholds = &config.scoring;
        let mut batch = SignalBatch::new(Dimension::Industry);

        for record in &dataset.industry.metrics {
            check_asset_id("industry.metrics", &record.asset_id)?;
            if !record.benchmark_value.is_finite() || record.benchmark_value <= 0.0 {
                warn!(
                    asset_id = %record.asset_id,
                    metric = %record.metric,
                    benchmark = record.benchmark_value,
                    "unusable benchmark, skipping record"
                );
                continue;
            }
            if !record.company_value.is_finite() {
                warn!(
                    asset_id = %record.asset_id,
                    metric = %record.metric,
                    "non-finite company value, skipping record"
                );
                continue;
            }

            let deviation = (record.company_value - record.benchmark_value)
                / record.benchmark_value;
            let below_floor =
                record.company_value < record.benchmark_value * thresholds.performance;
            let significant = deviation <= -thresholds.significant_deviation;
            if !(below_floor || significant) {
                continue;
            }

            let severity = Severity::from_deviation(deviation);
            let shortfall = (-deviation).clamp(0.0, 1.0);
            debug!(
                asset_id = %record.asset_id,
                metric = %record.metric,
                deviation,
                severity = %severity,
                "benchmark shortfall"
            );
            batch.record(
                Asset::new(
                    record.asset_id.as_str(),
                    record.name.clone(),
                    AssetCategory::BusinessUnit,
                ),
                Signal::new(
                    record.asset_id.as_str(),
                    Dimension::Industry,
                    SignalKind::BenchmarkShortfall,
                    shortfall,
                )
                .with_weight(severity.signal_weight()),
            );
        }

        Ok(batch)
    }
}
