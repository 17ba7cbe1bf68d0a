//! Financial statement extractor.
//!
//! Scans asset listings, subsidiaries, real estate, and intellectual
//! property for balance sheet evidence of non-core assets.

use crate::dataset::CompanyDataset;
use crate::traits::{check_asset_id, usable_ratio, ExtractorError, SignalExtractor};
use carve_core::{
    AnalysisConfig, Asset, AssetAttributes, AssetCategory, Dimension, Signal, SignalBatch,
    SignalKind,
};
use tracing::debug;

/// Extracts financial signals from balance sheet style records.
pub struct FinancialExtractor;

impl SignalExtractor for FinancialExtractor {
    fn dimension(&self) -> Dimension {
        Dimension::Financial
    }

    fn name(&self) -> &'static str {
        "financial"
    }

    fn extract(
        &self,
        dataset: &CompanyDataset,
        config: &AnalysisConfig,
    ) -> Result<SignalBatch, ExtractorError> {
        let thresholds = &config.scoring;
        let mut batch = SignalBatch::new(Dimension::Financial);

        for record in &dataset.financial.asset_utilization {
            check_asset_id("financial.asset_utilization", &record.asset_id)?;
            if !usable_ratio("financial.asset_utilization", &record.asset_id, record.utilization) {
                continue;
            }
            if record.utilization < thresholds.low_utilization {
                debug!(
                    asset_id = %record.asset_id,
                    utilization = record.utilization,
                    "asset below utilization floor"
                );
                let asset = Asset::new(
                    record.asset_id.as_str(),
                    record.name.clone(),
                    record.category.clone(),
                )
                .with_attributes(
                    AssetAttributes::new()
                        .with_utilization(record.utilization)
                        .with_book_value(record.book_value),
                );
                batch.record(
                    asset,
                    Signal::new(
                        record.asset_id.as_str(),
                        Dimension::Financial,
                        SignalKind::Utilization,
                        record.utilization,
                    ),
                );
            }
        }

        for record in &dataset.financial.subsidiaries {
            check_asset_id("financial.subsidiaries", &record.asset_id)?;
            if !usable_ratio(
                "financial.subsidiaries",
                &record.asset_id,
                record.revenue_contribution,
            ) || !usable_ratio("financial.subsidiaries", &record.asset_id, record.profit_margin)
            {
                continue;
            }

            let mut signals = Vec::new();
            if record.revenue_contribution < thresholds.revenue_contribution {
                signals.push(Signal::new(
                    record.asset_id.as_str(),
                    Dimension::Financial,
                    SignalKind::RevenueContribution,
                    record.revenue_contribution,
                ));
            }
            if record.profit_margin < thresholds.profit_margin {
                signals.push(Signal::new(
                    record.asset_id.as_str(),
                    Dimension::Financial,
                    SignalKind::ProfitMargin,
                    record.profit_margin,
                ));
            }
            if !signals.is_empty() {
                debug!(
                    asset_id = %record.asset_id,
                    signals = signals.len(),
                    "marginal subsidiary"
                );
                batch.assets.push(
                    Asset::new(
                        record.asset_id.as_str(),
                        record.name.clone(),
                        AssetCategory::Subsidiary,
                    )
                    .with_attributes(
                        AssetAttributes::new()
                            .with_revenue_contribution(record.revenue_contribution),
                    ),
                );
                batch.signals.extend(signals);
            }
        }

        for record in &dataset.financial.real_estate {
            check_asset_id("financial.real_estate", &record.asset_id)?;
            if !usable_ratio("financial.real_estate", &record.asset_id, record.occupancy) {
                continue;
            }
            if record.occupancy < thresholds.occupancy {
                debug!(
                    asset_id = %record.asset_id,
                    occupancy = record.occupancy,
                    "property below occupancy floor"
                );
                let asset = Asset::new(
                    record.asset_id.as_str(),
                    record.name.clone(),
                    AssetCategory::RealEstate,
                )
                .with_attributes(
                    AssetAttributes::new()
                        .with_utilization(record.occupancy)
                        .with_annual_cost(record.annual_cost),
                );
                batch.record(
                    asset,
                    Signal::new(
                        record.asset_id.as_str(),
                        Dimension::Financial,
                        SignalKind::Utilization,
                        record.occupancy,
                    ),
                );
            }
        }

        for record in &dataset.financial.intellectual_property {
            check_asset_id("financial.intellectual_property", &record.asset_id)?;
            if !usable_ratio(
                "financial.intellectual_property",
                &record.asset_id,
                record.active_use_rate,
            ) {
                continue;
            }
            if record.active_use_rate < thresholds.low_utilization {
                debug!(
                    asset_id = %record.asset_id,
                    active_use_rate = record.active_use_rate,
                    "idle intellectual property"
                );
                let asset = Asset::new(
                    record.asset_id.as_str(),
                    record.name.clone(),
                    AssetCategory::IntellectualProperty,
                )
                .with_attributes(
                    AssetAttributes::new()
                        .with_utilization(record.active_use_rate)
                        .with_annual_cost(record.maintenance_cost),
                );
                batch.record(
                    asset,
                    Signal::new(
                        record.asset_id.as_str(),
                        Dimension::Financial,
                        SignalKind::Utilization,
                        record.active_use_rate,
                    ),
                );
            }
        }

        Ok(batch)
    }
}
