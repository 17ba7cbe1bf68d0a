//! Final classification records.

use crate::models::{AssetCategory, AssetId, Dimension};
use serde::{Deserialize, Serialize};

/// Classification bucket for a scored asset.
///
/// Ordering follows divestiture priority: `NonCoreHigh` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Strong divestiture candidate.
    NonCoreHigh,
    /// Likely divestiture candidate.
    NonCoreMedium,
    /// Marginal divestiture candidate.
    NonCoreLow,
    /// Not enough evidence of non-core-ness.
    Core,
}

impl Tier {
    /// All tiers in priority order.
    pub const ALL: [Tier; 4] = [
        Tier::NonCoreHigh,
        Tier::NonCoreMedium,
        Tier::NonCoreLow,
        Tier::Core,
    ];

    /// Snake-case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::NonCoreHigh => "non_core_high",
            Tier::NonCoreMedium => "non_core_medium",
            Tier::NonCoreLow => "non_core_low",
            Tier::Core => "core",
        }
    }

    /// Whether this tier marks the asset as a non-core candidate.
    pub fn is_non_core(&self) -> bool {
        !matches!(self, Tier::Core)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Final classification record for one asset.
///
/// Never mutated after a run; regenerated from scratch each evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Asset the record describes.
    pub asset_id: AssetId,
    /// Asset name, copied from the registry for self-contained output.
    pub name: String,
    /// Asset category, copied from the registry.
    pub category: AssetCategory,
    /// Highest tier the confidence clears.
    pub tier: Tier,
    /// Aggregated confidence in [0, 1].
    pub confidence: f64,
    /// Dimensions that contributed scores.
    pub contributing_dimensions: Vec<Dimension>,
    /// Optional rationale text filled in by an augmenter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}
