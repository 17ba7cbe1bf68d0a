//! Company dataset records.
//!
//! A [`CompanyDataset`] is the already-loaded input the extractors read.
//! Every section defaults to empty so a partial dataset is valid; the
//! `as_of_year` is fixed at load time so age-based rules stay deterministic
//! for a given file.

use crate::traits::ExtractorError;
use carve_core::AssetCategory;
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of one company's data across all four analytical dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyDataset {
    /// Company the snapshot describes.
    #[serde(default)]
    pub company_name: String,
    /// Reference year for age-based rules.
    #[serde(default = "current_year")]
    pub as_of_year: i32,
    /// Balance sheet and subsidiary records.
    #[serde(default)]
    pub financial: FinancialData,
    /// Capacity and usage records.
    #[serde(default)]
    pub operational: OperationalData,
    /// Benchmark comparison records.
    #[serde(default)]
    pub industry: IndustryData,
    /// Acquisition and market history records.
    #[serde(default)]
    pub historical: HistoricalData,
}

fn current_year() -> i32 {
    Utc::now().year()
}

impl CompanyDataset {
    /// Parses a dataset from JSON.
    pub fn from_json(raw: &str) -> Result<Self, ExtractorError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Records read by the financial extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialData {
    /// Assets listed with a utilization rate and book value.
    #[serde(default)]
    pub asset_utilization: Vec<UtilizationRecord>,
    /// Subsidiaries and joint ventures.
    #[serde(default)]
    pub subsidiaries: Vec<SubsidiaryRecord>,
    /// Owned or leased properties.
    #[serde(default)]
    pub real_estate: Vec<PropertyRecord>,
    /// Patents and other intellectual property.
    #[serde(default)]
    pub intellectual_property: Vec<PatentRecord>,
}

/// A balance sheet asset with a measured utilization rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationRecord {
    pub asset_id: String,
    pub name: String,
    pub category: AssetCategory,
    /// Fraction of capacity in active use, 0 to 1.
    pub utilization: f64,
    /// Carrying value in the reporting currency.
    pub book_value: f64,
}

/// A subsidiary or joint venture with its contribution to the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsidiaryRecord {
    pub asset_id: String,
    pub name: String,
    /// Share of group revenue, 0 to 1.
    pub revenue_contribution: f64,
    /// Profit margin, 0 to 1.
    pub profit_margin: f64,
}

/// A property holding with its occupancy and running cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub asset_id: String,
    pub name: String,
    /// Occupied fraction of the space, 0 to 1.
    pub occupancy: f64,
    /// Annual carrying cost in the reporting currency.
    pub annual_cost: f64,
}

/// A patent or licensed technology with its current use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatentRecord {
    pub asset_id: String,
    pub name: String,
    /// Fraction of the portfolio's products still using it, 0 to 1.
    pub active_use_rate: f64,
    /// Annual maintenance and renewal cost.
    pub maintenance_cost: f64,
}

/// Records read by the operational extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationalData {
    /// Production lines mapped to revenue streams.
    #[serde(default)]
    pub production_lines: Vec<ProductionLineRecord>,
    /// Manufacturing facilities.
    #[serde(default)]
    pub facilities: Vec<FacilityRecord>,
    /// Warehouses and distribution hubs.
    #[serde(default)]
    pub distribution_centers: Vec<DistributionCenterRecord>,
    /// Individual machines and installed systems.
    #[serde(default)]
    pub equipment: Vec<EquipmentRecord>,
    /// Technology platforms, often from acquisitions.
    #[serde(default)]
    pub technologies: Vec<TechnologyRecord>,
    /// Minority stakes in other companies.
    #[serde(default)]
    pub investments: Vec<InvestmentRecord>,
}

/// A production line and its share of company revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionLineRecord {
    pub asset_id: String,
    pub name: String,
    /// Share of company revenue, 0 to 1.
    pub revenue_share: f64,
}

/// A manufacturing facility and its utilization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub asset_id: String,
    pub name: String,
    /// Fraction of capacity in active use, 0 to 1.
    pub utilization: f64,
    /// Annual maintenance cost, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_maintenance_cost: Option<f64>,
}

/// A warehouse or distribution hub and its utilization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionCenterRecord {
    pub asset_id: String,
    pub name: String,
    /// Fraction of capacity in active use, 0 to 1.
    pub utilization: f64,
    /// Annual running cost, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_cost: Option<f64>,
}

/// A machine or installed system and when it last ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub asset_id: String,
    pub name: String,
    /// Year the equipment entered service.
    pub commissioned_year: i32,
    /// Date of last recorded use; absent when usage is untracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<NaiveDate>,
    /// Carrying value, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_value: Option<f64>,
}

/// A technology platform and how much of the business uses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyRecord {
    pub asset_id: String,
    pub name: String,
    /// Fraction of the business actively using the platform, 0 to 1.
    pub usage_rate: f64,
}

/// A minority stake in another company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRecord {
    pub asset_id: String,
    pub name: String,
    /// How well the stake fits current strategy, 0 to 1.
    pub strategic_fit: f64,
}

/// Records read by the industry extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndustryData {
    /// Per-asset metric values paired with their industry benchmarks.
    #[serde(default)]
    pub metrics: Vec<BenchmarkRecord>,
}

/// One metric comparison between an asset and its industry benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub asset_id: String,
    pub name: String,
    /// Metric being compared, such as `asset_turnover`.
    pub metric: String,
    /// The company's value for the metric.
    pub company_value: f64,
    /// The industry benchmark for the metric.
    pub benchmark_value: f64,
}

/// Records read by the historical extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalData {
    /// Past acquisitions and their integration state.
    #[serde(default)]
    pub acquisitions: Vec<AcquisitionRecord>,
    /// Business units left over from earlier strategies.
    #[serde(default)]
    pub legacy_initiatives: Vec<InitiativeRecord>,
    /// Assets whose market has moved away from them.
    #[serde(default)]
    pub market_shifts: Vec<MarketShiftRecord>,
}

/// A past acquisition and how far it was integrated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionRecord {
    pub asset_id: String,
    pub name: String,
    /// Year the acquisition closed.
    pub acquired_year: i32,
    /// Achieved integration, 0 (standalone) to 1 (fully absorbed).
    pub integration_level: f64,
}

/// A business unit created by a strategic initiative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitiativeRecord {
    pub asset_id: String,
    pub name: String,
    /// Current state of the originating initiative.
    pub status: InitiativeStatus,
    /// Year the initiative was wound down, when it was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wound_down_year: Option<i32>,
}

/// Lifecycle state of a strategic initiative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitiativeStatus {
    /// Still part of current strategy.
    Active,
    /// Reduced but not terminated.
    ScaledBack,
    /// Formally terminated.
    Abandoned,
}

/// An asset whose market relevance has shifted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketShiftRecord {
    pub asset_id: String,
    pub name: String,
    /// Current relevance of the asset's market segment.
    pub relevance: MarketRelevance,
}

/// Graded relevance of an asset's market segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketRelevance {
    Strong,
    Stable,
    Declining,
    Diminishing,
    Minimal,
    None,
}

impl MarketRelevance {
    /// Numeric grade used against the market relevance threshold.
    pub fn grade(&self) -> f64 {
        match self {
            MarketRelevance::Strong => 1.0,
            MarketRelevance::Stable => 0.8,
            MarketRelevance::Declining => 0.45,
            MarketRelevance::Diminishing => 0.3,
            MarketRelevance::Minimal => 0.15,
            MarketRelevance::None => 0.0,
        }
    }
}

impl std::fmt::Display for MarketRelevance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MarketRelevance::Strong => "strong",
            MarketRelevance::Stable => "stable",
            MarketRelevance::Declining => "declining",
            MarketRelevance::Diminishing => "diminishing",
            MarketRelevance::Minimal => "minimal",
            MarketRelevance::None => "none",
        };
        write!(f, "{label}")
    }
}
