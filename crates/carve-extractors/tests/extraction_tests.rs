//! Integration tests running the extractors against the analysis engine.
//!
//! The sample dataset pins its as-of year, so every signal value and
//! therefore every confidence below is a fixed number.

use carve_core::{AnalysisConfig, AnalysisEngine, Dimension, Tier};
use carve_extractors::testing::sample_dataset;
use carve_extractors::{extract_all, CompanyDataset};

fn engine_over_sample() -> AnalysisEngine {
    let config = AnalysisConfig::default();
    let mut engine = AnalysisEngine::new(config.clone()).unwrap();
    for batch in extract_all(&sample_dataset(), &config).unwrap() {
        engine.ingest(batch);
    }
    engine
}

#[test]
fn test_batches_arrive_in_dimension_order() {
    let batches = extract_all(&sample_dataset(), &AnalysisConfig::default()).unwrap();
    let dimensions: Vec<Dimension> = batches.iter().map(|batch| batch.dimension).collect();
    assert_eq!(
        dimensions,
        vec![
            Dimension::Financial,
            Dimension::Operational,
            Dimension::Industry,
            Dimension::Historical,
        ]
    );
    assert!(batches.iter().all(|batch| !batch.is_empty()));
}

#[test]
fn test_sample_run_produces_known_candidates() {
    let mut engine = engine_over_sample();
    let candidates = engine.identify_non_core_assets(0.6).unwrap();

    assert_eq!(candidates.len(), 16);

    // Fully idle assets lead the list, tied at full confidence.
    assert_eq!(candidates[0].asset_id.as_str(), "ar-platform");
    assert_eq!(candidates[0].confidence, 1.0);
    assert_eq!(candidates[0].tier, Tier::NonCoreHigh);
    assert_eq!(candidates[1].asset_id.as_str(), "print-division");
    assert_eq!(candidates[1].confidence, 1.0);

    // The last candidate sits exactly on the inclusive cutoff.
    let last = candidates.last().unwrap();
    assert_eq!(last.asset_id.as_str(), "press-xj5");
    assert!((last.confidence - 0.6).abs() < 1e-9);

    for pair in candidates.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
    assert!(candidates.iter().all(|record| record.tier.is_non_core()));
}

#[test]
fn test_multi_dimension_asset_aggregates_across_extractors() {
    // Plant B appears in the financial listings at 35% utilization and in
    // the industry metrics at a -55% capacity deviation. With weights 1.0
    // and 1.5 the confidence lands near 0.59.
    let mut engine = engine_over_sample();
    let records = engine.classify_all().unwrap();

    let plant_b = records
        .iter()
        .find(|record| record.asset_id.as_str() == "plant-b")
        .unwrap();
    assert_eq!(
        plant_b.contributing_dimensions,
        vec![Dimension::Financial, Dimension::Industry]
    );
    assert!((plant_b.confidence - 0.590769).abs() < 1e-4);
    assert_eq!(plant_b.tier, Tier::NonCoreLow);
}

#[test]
fn test_every_scored_asset_is_classified() {
    let mut engine = engine_over_sample();
    let records = engine.classify_all().unwrap();

    // 27 distinct assets produce at least one signal in the sample.
    assert_eq!(records.len(), 27);

    // Healthy records never reach the output.
    for silent in ["plant-a", "line-a", "line-b", "nova-robotics", "sensor-line"] {
        assert!(
            !records.iter().any(|record| record.asset_id.as_str() == silent),
            "{silent} should not be classified"
        );
    }
}

#[test]
fn test_extraction_is_deterministic() {
    let config = AnalysisConfig::default();
    let first = extract_all(&sample_dataset(), &config).unwrap();
    let second = extract_all(&sample_dataset(), &config).unwrap();

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.signals, b.signals);
        assert_eq!(a.assets, b.assets);
    }
}

#[test]
fn test_empty_dataset_yields_empty_run() {
    let config = AnalysisConfig::default();
    let mut engine = AnalysisEngine::new(config.clone()).unwrap();
    for batch in extract_all(&CompanyDataset::default(), &config).unwrap() {
        engine.ingest(batch);
    }

    assert!(engine.identify_with_default_cutoff().unwrap().is_empty());
}
