//! Test fixtures for the extraction pipeline.
//!
//! Provides a canonical sample dataset used by unit tests, integration
//! tests, and the CLI `sample` command.

use crate::dataset::{
    AcquisitionRecord, BenchmarkRecord, CompanyDataset, DistributionCenterRecord,
    EquipmentRecord, FacilityRecord, InitiativeRecord, InitiativeStatus, InvestmentRecord,
    MarketRelevance, MarketShiftRecord, PatentRecord, ProductionLineRecord, PropertyRecord,
    SubsidiaryRecord, TechnologyRecord, UtilizationRecord,
};
use carve_core::AssetCategory;
use chrono::NaiveDate;

/// Reference year the sample dataset is pinned to.
pub const SAMPLE_AS_OF_YEAR: i32 = 2025;

/// Builds the canonical sample dataset.
///
/// The records cover every extraction rule at least once: underused plants,
/// marginal subsidiaries, half-empty properties, idle patents, dormant
/// equipment, benchmark laggards, stalled acquisitions, and fading market
/// segments, alongside healthy counterparts that must stay silent. The
/// as-of year is pinned so age-based signals are reproducible.
pub fn sample_dataset() -> CompanyDataset {
    let mut dataset = CompanyDataset {
        company_name: "Meridian Industrial Group".to_string(),
        as_of_year: SAMPLE_AS_OF_YEAR,
        ..CompanyDataset::default()
    };

    dataset.financial.asset_utilization = vec![
        UtilizationRecord {
            asset_id: "plant-a".into(),
            name: "Manufacturing Plant A".into(),
            category: AssetCategory::Facility,
            utilization: 0.82,
            book_value: 30_000_000.0,
        },
        UtilizationRecord {
            asset_id: "plant-b".into(),
            name: "Manufacturing Plant B".into(),
            category: AssetCategory::Facility,
            utilization: 0.35,
            book_value: 12_500_000.0,
        },
        UtilizationRecord {
            asset_id: "dist-east".into(),
            name: "Distribution Center East".into(),
            category: AssetCategory::Facility,
            utilization: 0.28,
            book_value: 8_700_000.0,
        },
    ];
    dataset.financial.subsidiaries = vec![
        SubsidiaryRecord {
            asset_id: "techsys".into(),
            name: "TechSys Solutions".into(),
            revenue_contribution: 0.03,
            profit_margin: 0.04,
        },
        SubsidiaryRecord {
            asset_id: "global-logistics".into(),
            name: "Global Logistics Partners".into(),
            revenue_contribution: 0.02,
            profit_margin: 0.01,
        },
    ];
    dataset.financial.real_estate = vec![
        PropertyRecord {
            asset_id: "chicago-tower".into(),
            name: "Chicago Office Tower Floors 12-14".into(),
            occupancy: 0.48,
            annual_cost: 1_200_000.0,
        },
        PropertyRecord {
            asset_id: "legacy-campus".into(),
            name: "Legacy Manufacturing Campus".into(),
            occupancy: 0.41,
            annual_cost: 950_000.0,
        },
    ];
    dataset.financial.intellectual_property = vec![
        PatentRecord {
            asset_id: "patent-legacy-process".into(),
            name: "Legacy Manufacturing Process Patent".into(),
            active_use_rate: 0.05,
            maintenance_cost: 45_000.0,
        },
        PatentRecord {
            asset_id: "patent-discontinued".into(),
            name: "Discontinued Product Technology Patent".into(),
            active_use_rate: 0.02,
            maintenance_cost: 30_000.0,
        },
    ];

    dataset.operational.production_lines = vec![
        ProductionLineRecord {
            asset_id: "line-a".into(),
            name: "Production Line A".into(),
            revenue_share: 0.32,
        },
        ProductionLineRecord {
            asset_id: "line-b".into(),
            name: "Production Line B".into(),
            revenue_share: 0.28,
        },
        ProductionLineRecord {
            asset_id: "line-c".into(),
            name: "Production Line C".into(),
            revenue_share: 0.03,
        },
    ];
    dataset.operational.facilities = vec![
        FacilityRecord {
            asset_id: "plant-c".into(),
            name: "Plant C".into(),
            utilization: 0.35,
            annual_maintenance_cost: Some(2_800_000.0),
        },
        FacilityRecord {
            asset_id: "assembly-5".into(),
            name: "Assembly Line 5".into(),
            utilization: 0.22,
            annual_maintenance_cost: Some(950_000.0),
        },
    ];
    dataset.operational.distribution_centers = vec![
        DistributionCenterRecord {
            asset_id: "northeast-hub".into(),
            name: "Northeast Distribution Hub".into(),
            utilization: 0.42,
            annual_cost: Some(1_850_000.0),
        },
        DistributionCenterRecord {
            asset_id: "southern-b".into(),
            name: "Southern Warehouse B".into(),
            utilization: 0.38,
            annual_cost: Some(1_420_000.0),
        },
    ];
    dataset.operational.equipment = vec![
        EquipmentRecord {
            asset_id: "press-xj5".into(),
            name: "Stamping Press Model XJ-5".into(),
            commissioned_year: 2012,
            last_used: NaiveDate::from_ymd_opt(2022, 3, 15),
            book_value: Some(1_250_000.0),
        },
        EquipmentRecord {
            asset_id: "pack-v25".into(),
            name: "Packaging System v2.5".into(),
            commissioned_year: 2015,
            last_used: NaiveDate::from_ymd_opt(2023, 1, 10),
            book_value: Some(870_000.0),
        },
    ];
    dataset.operational.technologies = vec![
        TechnologyRecord {
            asset_id: "quantum-enc".into(),
            name: "Quantum Encryption System".into(),
            usage_rate: 0.05,
        },
        TechnologyRecord {
            asset_id: "ar-platform".into(),
            name: "Augmented Reality Platform".into(),
            usage_rate: 0.0,
        },
    ];
    dataset.operational.investments = vec![
        InvestmentRecord {
            asset_id: "greentech".into(),
            name: "GreenTech Startups Inc.".into(),
            strategic_fit: 0.2,
        },
        InvestmentRecord {
            asset_id: "digital-media".into(),
            name: "Digital Media Group".into(),
            strategic_fit: 0.25,
        },
    ];

    dataset.industry.metrics = vec![
        BenchmarkRecord {
            asset_id: "office-properties".into(),
            name: "Office Properties".into(),
            metric: "asset_turnover".into(),
            company_value: 0.33,
            benchmark_value: 0.80,
        },
        BenchmarkRecord {
            asset_id: "storage-facilities".into(),
            name: "Storage Facilities".into(),
            metric: "asset_turnover".into(),
            company_value: 0.67,
            benchmark_value: 0.90,
        },
        BenchmarkRecord {
            asset_id: "healthcare-services".into(),
            name: "Healthcare Services".into(),
            metric: "operating_margin".into(),
            company_value: 0.08,
            benchmark_value: 0.15,
        },
        BenchmarkRecord {
            asset_id: "plant-b".into(),
            name: "Manufacturing Plant B".into(),
            metric: "capacity_utilization".into(),
            company_value: 0.35,
            benchmark_value: 0.78,
        },
    ];

    dataset.historical.acquisitions = vec![
        AcquisitionRecord {
            asset_id: "securetech".into(),
            name: "SecureTech".into(),
            acquired_year: 2020,
            integration_level: 0.2,
        },
        AcquisitionRecord {
            asset_id: "visionworks".into(),
            name: "VisionWorks".into(),
            acquired_year: 2021,
            integration_level: 0.35,
        },
        AcquisitionRecord {
            asset_id: "nova-robotics".into(),
            name: "Nova Robotics".into(),
            acquired_year: 2024,
            integration_level: 0.3,
        },
    ];
    dataset.historical.legacy_initiatives = vec![
        InitiativeRecord {
            asset_id: "print-division".into(),
            name: "Print Media Division".into(),
            status: InitiativeStatus::Abandoned,
            wound_down_year: Some(2019),
        },
        InitiativeRecord {
            asset_id: "retail-pilot".into(),
            name: "Retail Pilot Stores".into(),
            status: InitiativeStatus::ScaledBack,
            wound_down_year: None,
        },
    ];
    dataset.historical.market_shifts = vec![
        MarketShiftRecord {
            asset_id: "broadcast-platform".into(),
            name: "Legacy Broadcast Platform".into(),
            relevance: MarketRelevance::Declining,
        },
        MarketShiftRecord {
            asset_id: "print-archive".into(),
            name: "Print Archive Library".into(),
            relevance: MarketRelevance::Minimal,
        },
        MarketShiftRecord {
            asset_id: "sensor-line".into(),
            name: "Industrial Sensor Line".into(),
            relevance: MarketRelevance::Stable,
        },
    ];

    dataset
}
