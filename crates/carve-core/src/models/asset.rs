//! Asset data model for the divestiture screening pipeline.
//!
//! Assets represent parts of a company (facilities, subsidiaries, properties,
//! intellectual property, etc.) that are scored for non-core-ness during an
//! analysis run.

use serde::{Deserialize, Serialize};

/// Stable identifier for an asset, supplied by the dataset.
///
/// Ids are plain strings (slugs) so that classification output tie-breaks
/// reproduce byte-for-byte across runs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Creates an asset id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AssetId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// An asset under consideration for divestiture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Stable identifier referenced by signals and scores.
    pub id: AssetId,
    /// Human-readable name of the asset.
    pub name: String,
    /// Kind of asset.
    pub category: AssetCategory,
    /// Known quantitative attributes, all optional.
    #[serde(default)]
    pub attributes: AssetAttributes,
}

impl Asset {
    /// Creates a new asset with empty attributes.
    pub fn new(id: impl Into<AssetId>, name: impl Into<String>, category: AssetCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            attributes: AssetAttributes::default(),
        }
    }

    /// Replaces the asset's attributes.
    pub fn with_attributes(mut self, attributes: AssetAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Kind of asset being screened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    /// Manufacturing or processing facility.
    Facility,
    /// Owned subsidiary or affiliate company.
    Subsidiary,
    /// Office, warehouse, or land holding.
    RealEstate,
    /// Patents, trademarks, and licensed technology.
    IntellectualProperty,
    /// Minority stake or venture investment.
    Investment,
    /// Production machinery and other hard equipment.
    Equipment,
    /// Software platform or internal technology.
    Technology,
    /// Product line or operating business unit.
    BusinessUnit,
    /// Custom asset category.
    Custom(String),
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetCategory::Facility => write!(f, "Facility"),
            AssetCategory::Subsidiary => write!(f, "Subsidiary"),
            AssetCategory::RealEstate => write!(f, "Real Estate"),
            AssetCategory::IntellectualProperty => write!(f, "Intellectual Property"),
            AssetCategory::Investment => write!(f, "Investment"),
            AssetCategory::Equipment => write!(f, "Equipment"),
            AssetCategory::Technology => write!(f, "Technology"),
            AssetCategory::BusinessUnit => write!(f, "Business Unit"),
            AssetCategory::Custom(name) => write!(f, "Custom: {}", name),
        }
    }
}

/// Quantitative attributes known about an asset.
///
/// Extractors fill in whatever their dataset slice provides; every field is
/// optional and absent fields are simply unknown, not zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetAttributes {
    /// Fraction of capacity in active use (0.0 - 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization: Option<f64>,
    /// Share of company revenue attributable to the asset (0.0 - 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_contribution: Option<f64>,
    /// Carrying value on the balance sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_value: Option<f64>,
    /// Yearly cost of keeping the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_cost: Option<f64>,
    /// Year the asset was acquired, when it entered via acquisition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquisition_year: Option<i32>,
    /// How far integration has progressed (0.0 - 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_level: Option<f64>,
}

impl AssetAttributes {
    /// Creates empty attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the utilization fraction, clamped to [0, 1].
    pub fn with_utilization(mut self, utilization: f64) -> Self {
        self.utilization = Some(utilization.clamp(0.0, 1.0));
        self
    }

    /// Sets the revenue contribution share, clamped to [0, 1].
    pub fn with_revenue_contribution(mut self, contribution: f64) -> Self {
        self.revenue_contribution = Some(contribution.clamp(0.0, 1.0));
        self
    }

    /// Sets the book value.
    pub fn with_book_value(mut self, book_value: f64) -> Self {
        self.book_value = Some(book_value);
        self
    }

    /// Sets the annual carrying cost.
    pub fn with_annual_cost(mut self, annual_cost: f64) -> Self {
        self.annual_cost = Some(annual_cost);
        self
    }

    /// Sets the acquisition year.
    pub fn with_acquisition_year(mut self, year: i32) -> Self {
        self.acquisition_year = Some(year);
        self
    }

    /// Sets the integration level, clamped to [0, 1].
    pub fn with_integration_level(mut self, level: f64) -> Self {
        self.integration_level = Some(level.clamp(0.0, 1.0));
        self
    }
}
