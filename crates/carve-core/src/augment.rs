//! Optional rationale augmentation.
//!
//! An augmenter produces explanatory text for classified assets. The engine
//! consults it only after scoring and classification, so its presence or
//! absence cannot change tiers or confidence values.

use crate::models::{Asset, Classification, Dimension};

/// Produces rationale text for a classified asset.
pub trait Augmenter {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Returns rationale text, or `None` to leave the field empty.
    fn explain(&self, asset: &Asset, classification: &Classification) -> Option<String>;
}

/// Deterministic augmenter that renders rationale from the contributing
/// dimensions and whatever attributes the asset carries.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedAugmenter;

impl Augmenter for RuleBasedAugmenter {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn explain(&self, asset: &Asset, classification: &Classification) -> Option<String> {
        if classification.contributing_dimensions.is_empty() {
            return None;
        }

        let mut notes = Vec::with_capacity(classification.contributing_dimensions.len());
        for dimension in &classification.contributing_dimensions {
            notes.push(match dimension {
                Dimension::Financial => match asset.attributes.revenue_contribution {
                    Some(contribution) => {
                        format!("revenue contribution {:.1}% of total", contribution * 100.0)
                    }
                    None => "weak financial footprint".to_string(),
                },
                Dimension::Operational => match asset.attributes.utilization {
                    Some(utilization) => {
                        format!("utilization at {:.0}% of capacity", utilization * 100.0)
                    }
                    None => "operationally underused".to_string(),
                },
                Dimension::Industry => "performing below industry benchmarks".to_string(),
                Dimension::Historical => match asset.attributes.acquisition_year {
                    Some(year) => format!("incomplete integration since {year} acquisition"),
                    None => "diminished strategic relevance".to_string(),
                },
            });
        }

        Some(format!(
            "{} at confidence {:.2}: {}",
            classification.tier,
            classification.confidence,
            notes.join("; ")
        ))
    }
}
