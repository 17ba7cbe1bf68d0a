//! Historical context extractor.
//!
//! Scans acquisition history, wound-down initiatives, and market shifts
//! for assets the company has outgrown.

use crate::dataset::{CompanyDataset, InitiativeStatus};
use crate::traits::{check_asset_id, usable_ratio, ExtractorError, SignalExtractor};
use carve_core::{
    AnalysisConfig, Asset, AssetAttributes, AssetCategory, Dimension, Signal, SignalBatch,
    SignalKind,
};
use tracing::{debug, warn};

/// Extracts historical signals from acquisition and market history.
pub struct HistoricalExtractor;

impl SignalExtractor for HistoricalExtractor {
    fn dimension(&self) -> Dimension {
        Dimension::Historical
    }

    fn name(&self) -> &'static str {
        "historical"
    }

    fn extract(
        &self,
        dataset: &CompanyDataset,
        config: &AnalysisConfig,
    ) -> Result<SignalBatch, ExtractorError> {
        let thresholds = &config.scoring;
        let mut batch = SignalBatch::new(Dimension::Historical);

        for record in &dataset.historical.acquisitions {
            check_asset_id("historical.acquisitions", &record.asset_id)?;
            if !usable_ratio(
                "historical.acquisitions",
                &record.asset_id,
                record.integration_level,
            ) {
                continue;
            }
            let years_since = dataset.as_of_year - record.acquired_year;
            if years_since < 0 {
                warn!(
                    asset_id = %record.asset_id,
                    acquired_year = record.acquired_year,
                    as_of_year = dataset.as_of_year,
                    "acquisition is after the dataset year, skipping record"
                );
                continue;
            }
            // Recent acquisitions get time to integrate before they count.
            if years_since >= thresholds.integration_years as i32
                && record.integration_level < 0.5
            {
                debug!(
                    asset_id = %record.asset_id,
                    years_since,
                    integration_level = record.integration_level,
                    "stalled acquisition integration"
                );
                let asset = Asset::new(
                    record.asset_id.as_str(),
                    record.name.clone(),
                    AssetCategory::BusinessUnit,
                )
                .with_attributes(
                    AssetAttributes::new()
                        .with_acquisition_year(record.acquired_year)
                        .with_integration_level(record.integration_level),
                );
                batch.record(
                    asset,
                    Signal::new(
                        record.asset_id.as_str(),
                        Dimension::Historical,
                        SignalKind::IntegrationShortfall,
                        1.0 - record.integration_level,
                    ),
                );
            }
        }

        for record in &dataset.historical.legacy_initiatives {
            check_asset_id("historical.legacy_initiatives", &record.asset_id)?;
            if record.status != InitiativeStatus::Abandoned {
                continue;
            }
            let Some(wound_down_year) = record.wound_down_year else {
                debug!(asset_id = %record.asset_id, "abandoned initiative without a wind-down year");
                continue;
            };
            let idle_years = dataset.as_of_year - wound_down_year;
            if idle_years < 0 {
                warn!(
                    asset_id = %record.asset_id,
                    wound_down_year,
                    as_of_year = dataset.as_of_year,
                    "wind-down is after the dataset year, skipping record"
                );
                continue;
            }
            let dormancy =
                (idle_years as f64 / thresholds.equipment_idle_years as f64).clamp(0.0, 1.0);
            debug!(
                asset_id = %record.asset_id,
                idle_years,
                dormancy,
                "residual unit from abandoned initiative"
            );
            batch.record(
                Asset::new(
                    record.asset_id.as_str(),
                    record.name.clone(),
                    AssetCategory::BusinessUnit,
                ),
                Signal::new(
                    record.asset_id.as_str(),
                    Dimension::Historical,
                    SignalKind::Dormancy,
                    dormancy,
                ),
            );
        }

        for record in &dataset.historical.market_shifts {
            check_asset_id("historical.market_shifts", &record.asset_id)?;
            let grade = record.relevance.grade();
            if grade < thresholds.market_relevance {
                debug!(
                    asset_id = %record.asset_id,
                    relevance = %record.relevance,
                    grade,
                    "declining market relevance"
                );
                batch.record(
                    Asset::new(
                        record.asset_id.as_str(),
                        record.name.clone(),
                        AssetCategory::BusinessUnit,
                    ),
                    Signal::new(
                        record.asset_id.as_str(),
                        Dimension::Historical,
                        SignalKind::MarketRelevance,
                        grade,
                    ),
                );
            }
        }

        Ok(batch)
    }
}
