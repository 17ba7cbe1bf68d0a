//! Operational assessment extractor.
//!
//! Scans production lines, facilities, distribution capacity, equipment,
//! technology platforms, and investments for usage evidence of non-core
//! assets.

use crate::dataset::CompanyDataset;
use crate::traits::{check_asset_id, usable_ratio, ExtractorError, SignalExtractor};
use carve_core::{
    AnalysisConfig, Asset, AssetAttributes, AssetCategory, Dimension, Signal, SignalBatch,
    SignalKind,
};
use chrono::Datelike;
use tracing::{debug, warn};

/// Extracts operational signals from capacity and usage records.
pub struct OperationalExtractor;

impl SignalExtractor for OperationalExtractor {
    fn dimension(&self) -> Dimension {
        Dimension::Operational
    }

    fn name(&self) -> &'static str {
        "operational"
    }

    fn extract(
        &self,
        dataset: &CompanyDataset,
        config: &AnalysisConfig,
    ) -> Result<SignalBatch, ExtractorError> {
        let thresholds = &config.scoring;
        let mut batch = SignalBatch::new(Dimension::Operational);

        for record in &dataset.operational.production_lines {
            check_asset_id("operational.production_lines", &record.asset_id)?;
            if !usable_ratio(
                "operational.production_lines",
                &record.asset_id,
                record.revenue_share,
            ) {
                continue;
            }
            if record.revenue_share < thresholds.revenue_contribution {
                debug!(
                    asset_id = %record.asset_id,
                    revenue_share = record.revenue_share,
                    "production line with marginal revenue"
                );
                let asset = Asset::new(
                    record.asset_id.as_str(),
                    record.name.clone(),
                    AssetCategory::Equipment,
                )
                .with_attributes(
                    AssetAttributes::new().with_revenue_contribution(record.revenue_share),
                );
                batch.record(
                    asset,
                    Signal::new(
                        record.asset_id.as_str(),
                        Dimension::Operational,
                        SignalKind::RevenueContribution,
                        record.revenue_share,
                    ),
                );
            }
        }

        for record in &dataset.operational.facilities {
            check_asset_id("operational.facilities", &record.asset_id)?;
            if !usable_ratio("operational.facilities", &record.asset_id, record.utilization) {
                continue;
            }
            if record.utilization < thresholds.facility_utilization {
                debug!(
                    asset_id = %record.asset_id,
                    utilization = record.utilization,
                    "underutilized facility"
                );
                let mut attributes = AssetAttributes::new().with_utilization(record.utilization);
                if let Some(cost) = record.annual_maintenance_cost {
                    attributes = attributes.with_annual_cost(cost);
                }
                let asset = Asset::new(
                    record.asset_id.as_str(),
                    record.name.clone(),
                    AssetCategory::Facility,
                )
                .with_attributes(attributes);
                batch.record(
                    asset,
                    Signal::new(
                        record.asset_id.as_str(),
                        Dimension::Operational,
                        SignalKind::Utilization,
                        record.utilization,
                    ),
                );
            }
        }

        for record in &dataset.operational.distribution_centers {
            check_asset_id("operational.distribution_centers", &record.asset_id)?;
            if !usable_ratio(
                "operational.distribution_centers",
                &record.asset_id,
                record.utilization,
            ) {
                continue;
            }
            if record.utilization < thresholds.warehouse_utilization {
                debug!(
                    asset_id = %record.asset_id,
                    utilization = record.utilization,
                    "excess distribution capacity"
                );
                let mut attributes = AssetAttributes::new().with_utilization(record.utilization);
                if let Some(cost) = record.annual_cost {
                    attributes = attributes.with_annual_cost(cost);
                }
                let asset = Asset::new(
                    record.asset_id.as_str(),
                    record.name.clone(),
                    AssetCategory::Facility,
                )
                .with_attributes(attributes);
                batch.record(
                    asset,
                    Signal::new(
                        record.asset_id.as_str(),
                        Dimension::Operational,
                        SignalKind::Utilization,
                        record.utilization,
                    ),
                );
            }
        }

        for record in &dataset.operational.equipment {
            check_asset_id("operational.equipment", &record.asset_id)?;
            let Some(last_used) = record.last_used else {
                debug!(asset_id = %record.asset_id, "no usage history, skipping");
                continue;
            };
            let idle_years = dataset.as_of_year - last_used.year();
            if idle_years < 0 {
                warn!(
                    asset_id = %record.asset_id,
                    last_used = %last_used,
                    as_of_year = dataset.as_of_year,
                    "last use is after the dataset year, skipping record"
                );
                continue;
            }
            if idle_years >= 1 {
                let dormancy =
                    (idle_years as f64 / thresholds.equipment_idle_years as f64).clamp(0.0, 1.0);
                debug!(
                    asset_id = %record.asset_id,
                    idle_years,
                    dormancy,
                    "dormant equipment"
                );
                let mut attributes =
                    AssetAttributes::new().with_acquisition_year(record.commissioned_year);
                if let Some(book_value) = record.book_value {
                    attributes = attributes.with_book_value(book_value);
                }
                let asset = Asset::new(
                    record.asset_id.as_str(),
                    record.name.clone(),
                    AssetCategory::Equipment,
                )
                .with_attributes(attributes);
                batch.record(
                    asset,
                    Signal::new(
                        record.asset_id.as_str(),
                        Dimension::Operational,
                        SignalKind::Dormancy,
                        dormancy,
                    ),
                );
            }
        }

        for record in &dataset.operational.technologies {
            check_asset_id("operational.technologies", &record.asset_id)?;
            if !usable_ratio("operational.technologies", &record.asset_id, record.usage_rate) {
                continue;
            }
            if record.usage_rate < thresholds.technology_usage {
                debug!(
                    asset_id = %record.asset_id,
                    usage_rate = record.usage_rate,
                    "underused technology platform"
                );
                let asset = Asset::new(
                    record.asset_id.as_str(),
                    record.name.clone(),
                    AssetCategory::Technology,
                )
                .with_attributes(AssetAttributes::new().with_utilization(record.usage_rate));
                batch.record(
                    asset,
                    Signal::new(
                        record.asset_id.as_str(),
                        Dimension::Operational,
                        SignalKind::Utilization,
                        record.usage_rate,
                    ),
                );
            }
        }

        for record in &dataset.operational.investments {
            check_asset_id("operational.investments", &record.asset_id)?;
            if !usable_ratio("operational.investments", &record.asset_id, record.strategic_fit) {
                continue;
            }
            if record.strategic_fit < 0.5 {
                debug!(
                    asset_id = %record.asset_id,
                    strategic_fit = record.strategic_fit,
                    "non-strategic investment"
                );
                let asset = Asset::new(
                    record.asset_id.as_str(),
                    record.name.clone(),
                    AssetCategory::Investment,
                )
                .with_attributes(AssetAttributes::new().with_integration_level(record.strategic_fit));
                batch.record(
                    asset,
                    Signal::new(
                        record.asset_id.as_str(),
                        Dimension::Operational,
                        SignalKind::IntegrationShortfall,
                        1.0 - record.strategic_fit,
                    ),
                );
            }
        }

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::EquipmentRecord;
    use crate::testing::sample_dataset;
    use chrono::NaiveDate;

    fn signal_value(batch: &SignalBatch, asset_id: &str) -> f64 {
        batch
            .signals
            .iter()
            .find(|signal| signal.asset_id.as_str() == asset_id)
            .map(|signal| signal.value)
            .unwrap()
    }

    #[test]
    fn test_marginal_production_line_is_flagged() {
        let batch = OperationalExtractor
            .extract(&sample_dataset(), &AnalysisConfig::default())
            .unwrap();

        assert_eq!(signal_value(&batch, "line-c"), 0.03);
        // Lines above the contribution floor stay silent.
        assert!(!batch
            .signals
            .iter()
            .any(|signal| signal.asset_id.as_str() == "line-a"));
    }

    #[test]
    fn test_dormancy_scales_with_idle_years() {
        // Last used in 2022 against an as-of year of 2025 over a five year
        // idle window.
        let batch = OperationalExtractor
            .extract(&sample_dataset(), &AnalysisConfig::default())
            .unwrap();

        assert!((signal_value(&batch, "press-xj5") - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_equipment_without_usage_history_is_skipped() {
        let mut dataset = CompanyDataset::default();
        dataset.as_of_year = 2025;
        dataset.operational.equipment.push(EquipmentRecord {
            asset_id: "mystery-rig".into(),
            name: "Mystery Rig".into(),
            commissioned_year: 2010,
            last_used: None,
            book_value: None,
        });

        let batch = OperationalExtractor
            .extract(&dataset, &AnalysisConfig::default())
            .unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_recently_used_equipment_is_not_dormant() {
        let mut dataset = CompanyDataset::default();
        dataset.as_of_year = 2025;
        dataset.operational.equipment.push(EquipmentRecord {
            asset_id: "active-press".into(),
            name: "Active Press".into(),
            commissioned_year: 2018,
            last_used: NaiveDate::from_ymd_opt(2025, 6, 1),
            book_value: Some(500_000.0),
        });

        let batch = OperationalExtractor
            .extract(&dataset, &AnalysisConfig::default())
            .unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_investment_shortfall_inverts_fit() {
        let batch = OperationalExtractor
            .extract(&sample_dataset(), &AnalysisConfig::default())
            .unwrap();

        let signal = batch
            .signals
            .iter()
            .find(|signal| signal.asset_id.as_str() == "greentech")
            .unwrap();
        assert_eq!(signal.kind, SignalKind::IntegrationShortfall);
        assert!((signal.value - 0.8).abs() < 1e-9);
    }
}
