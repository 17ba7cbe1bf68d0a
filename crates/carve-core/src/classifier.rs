//! Threshold classification of scored assets.

use crate::config::TierThresholds;
use crate::error::AnalysisError;
use crate::models::{Classification, Confidence, Tier};
use crate::registry::AssetRegistry;

/// Buckets confidence values into tiers and orders the result.
pub struct AssetClassifier {
    tiers: TierThresholds,
}

impl AssetClassifier {
    /// Creates a classifier over validated tier floors.
    pub fn new(tiers: TierThresholds) -> Self {
        Self { tiers }
    }

    /// Highest tier bucket the confidence clears, boundaries inclusive.
    pub fn tier(&self, confidence: f64) -> Tier {
        if confidence >= self.tiers.high {
            Tier::NonCoreHigh
        } else if confidence >= self.tiers.medium {
            Tier::NonCoreMedium
        } else if confidence >= self.tiers.low {
            Tier::NonCoreLow
        } else {
            Tier::Core
        }
    }

    /// Builds a classification record for every confidence.
    ///
    /// The result is total over the given confidences and ordered by
    /// descending confidence, ties broken by ascending asset id, so
    /// identical input reproduces an identical list.
    pub fn classify(
        &self,
        registry: &AssetRegistry,
        confidences: Vec<Confidence>,
    ) -> Result<Vec<Classification>, AnalysisError> {
        let mut records = Vec::with_capacity(confidences.len());
        for confidence in confidences {
            let asset = registry
                .get(&confidence.asset_id)
                .ok_or_else(|| AnalysisError::MissingAsset(confidence.asset_id.clone()))?;
            records.push(Classification {
                asset_id: confidence.asset_id,
                name: asset.name.clone(),
                category: asset.category.clone(),
                tier: self.tier(confidence.value),
                confidence: confidence.value,
                contributing_dimensions: confidence.contributing_dimensions,
                rationale: None,
            });
        }
        records.sort_by(|a, b| {
            b.confidence
                .total_cmp(&a.confidence)
                .then_with(|| a.asset_id.cmp(&b.asset_id))
        });
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Asset, AssetCategory, AssetId, Dimension};

    fn classifier() -> AssetClassifier {
        AssetClassifier::new(TierThresholds::default())
    }

    fn confidence(id: &str, value: f64) -> Confidence {
        Confidence {
            asset_id: AssetId::new(id),
            value,
            contributing_dimensions: vec![Dimension::Financial],
        }
    }

    fn registry_with(ids: &[&str]) -> AssetRegistry {
        let mut registry = AssetRegistry::new();
        for id in ids {
            registry.register(Asset::new(*id, format!("Asset {id}"), AssetCategory::Facility));
        }
        registry
    }

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        let classifier = classifier();
        assert_eq!(classifier.tier(0.80), Tier::NonCoreHigh);
        assert_eq!(classifier.tier(0.7999), Tier::NonCoreMedium);
        assert_eq!(classifier.tier(0.65), Tier::NonCoreMedium);
        assert_eq!(classifier.tier(0.50), Tier::NonCoreLow);
        assert_eq!(classifier.tier(0.4999), Tier::Core);
        assert_eq!(classifier.tier(0.0), Tier::Core);
        assert_eq!(classifier.tier(1.0), Tier::NonCoreHigh);
    }

    #[test]
    fn test_classify_orders_descending_with_id_tiebreak() {
        let registry = registry_with(&["b", "a", "c", "d"]);
        let confidences = vec![
            confidence("b", 0.7),
            confidence("a", 0.7),
            confidence("c", 0.9),
            confidence("d", 0.3),
        ];

        let records = classifier().classify(&registry, confidences).unwrap();
        let order: Vec<&str> = records.iter().map(|r| r.asset_id.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b", "d"]);
        assert_eq!(records[0].tier, Tier::NonCoreHigh);
        assert_eq!(records[3].tier, Tier::Core);
    }

    #[test]
    fn test_classify_copies_asset_fields() {
        let registry = registry_with(&["plant-b"]);
        let records = classifier()
            .classify(&registry, vec![confidence("plant-b", 0.66)])
            .unwrap();

        assert_eq!(records[0].name, "Asset plant-b");
        assert_eq!(records[0].category, AssetCategory::Facility);
        assert_eq!(records[0].tier, Tier::NonCoreMedium);
        assert!(records[0].rationale.is_none());
    }

    #[test]
    fn test_classify_rejects_unknown_asset() {
        let registry = registry_with(&["plant-b"]);
        let result = classifier().classify(&registry, vec![confidence("ghost", 0.7)]);

        assert!(matches!(result, Err(AnalysisError::MissingAsset(id)) if id.as_str() == "ghost"));
    }
}
