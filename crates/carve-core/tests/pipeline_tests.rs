//! Integration tests for the end-to-end classification pipeline.
//!
//! These tests drive the engine the way extractors do, one batch per
//! dimension, and check the documented behavior of the whole chain:
//! normalization, weighted confidence, tier assignment, ordering, and
//! cutoff filtering.

use carve_core::{
    AnalysisConfig, AnalysisEngine, Asset, AssetCategory, Classification, Dimension,
    ScoringThresholds, Signal, SignalBatch, SignalKind, Tier,
};

/// Builds one batch carrying a signal for each listed asset.
fn batch(dimension: Dimension, entries: &[(&str, SignalKind, f64)]) -> SignalBatch {
    let mut batch = SignalBatch::new(dimension);
    for (id, kind, value) in entries {
        batch.record(
            Asset::new(*id, format!("Asset {id}"), AssetCategory::Facility),
            Signal::new(*id, dimension, *kind, *value),
        );
    }
    batch
}

fn engine() -> AnalysisEngine {
    AnalysisEngine::new(AnalysisConfig::default()).unwrap()
}

#[test]
fn test_underused_plant_lands_in_medium_tier() {
    // A plant at 35% utilization contributing 8% of revenue against a 30%
    // contribution floor scores 0.65 operationally and ~0.7333 financially.
    // Equal weights put the confidence at ~0.6917.
    let mut scoring = ScoringThresholds::default();
    scoring.revenue_contribution = 0.30;
    let config = AnalysisConfig::default().with_scoring(scoring);

    let mut engine = AnalysisEngine::new(config).unwrap();
    engine.ingest(batch(
        Dimension::Operational,
        &[("plant-b", SignalKind::Utilization, 0.35)],
    ));
    engine.ingest(batch(
        Dimension::Financial,
        &[("plant-b", SignalKind::RevenueContribution, 0.08)],
    ));

    let included = engine.identify_non_core_assets(0.65).unwrap();
    assert_eq!(included.len(), 1);
    let record = &included[0];
    assert!((record.confidence - 0.691666).abs() < 1e-4);
    assert_eq!(record.tier, Tier::NonCoreMedium);
    assert_eq!(
        record.contributing_dimensions,
        vec![Dimension::Financial, Dimension::Operational]
    );

    // The same asset falls out once the cutoff passes its confidence.
    assert!(engine.identify_non_core_assets(0.70).unwrap().is_empty());
}

#[test]
fn test_output_ordering_is_deterministic() {
    let mut engine = engine();
    engine.ingest(batch(
        Dimension::Operational,
        &[
            ("delta", SignalKind::Utilization, 0.40),
            ("alpha", SignalKind::Utilization, 0.10),
            ("gamma", SignalKind::Utilization, 0.30),
            ("beta", SignalKind::Utilization, 0.40),
        ],
    ));

    let records = engine.classify_all().unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.asset_id.as_str()).collect();

    // Descending confidence, ties broken by ascending asset id.
    assert_eq!(ids, vec!["alpha", "gamma", "beta", "delta"]);
    assert_eq!(records[2].confidence, records[3].confidence);
}

#[test]
fn test_repeated_evaluation_is_stable() {
    let mut engine = engine();
    engine.ingest(batch(
        Dimension::Operational,
        &[
            ("mill-7", SignalKind::Utilization, 0.22),
            ("depot-2", SignalKind::Utilization, 0.55),
        ],
    ));
    engine.ingest(batch(
        Dimension::Industry,
        &[
            ("mill-7", SignalKind::BenchmarkShortfall, 0.6),
            ("depot-2", SignalKind::BenchmarkShortfall, 0.1),
        ],
    ));

    let first = engine.classify_all().unwrap();
    let second = engine.classify_all().unwrap();

    let render = |records: &[Classification]| serde_json::to_string(records).unwrap();
    assert_eq!(render(&first), render(&second));
}

#[test]
fn test_asset_with_no_valid_scores_is_absent() {
    let mut engine = engine();
    engine.ingest(batch(
        Dimension::Operational,
        &[
            ("fine", SignalKind::Utilization, 0.30),
            ("broken", SignalKind::Utilization, 2.0),
        ],
    ));

    // Even a zero cutoff never surfaces an asset that produced no scores.
    let records = engine.identify_non_core_assets(0.0).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].asset_id.as_str(), "fine");
}

#[test]
fn test_invalid_signal_excludes_only_its_dimension() {
    let mut engine = engine();
    engine.ingest(batch(
        Dimension::Operational,
        &[("plant-b", SignalKind::Utilization, 0.35)],
    ));
    engine.ingest(batch(
        Dimension::Financial,
        &[("plant-b", SignalKind::RevenueContribution, -0.2)],
    ));

    let records = engine.classify_all().unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];

    // Confidence comes from the surviving operational dimension alone.
    assert!((record.confidence - 0.65).abs() < 1e-9);
    assert_eq!(record.contributing_dimensions, vec![Dimension::Operational]);
}

#[test]
fn test_single_dimension_weight_renormalizes() {
    // Industry carries weight 1.5 by default; when it is the only dimension
    // present, renormalization cancels the weight and the confidence equals
    // the dimension score.
    let mut engine = engine();
    engine.ingest(batch(
        Dimension::Industry,
        &[("laggard", SignalKind::BenchmarkShortfall, 0.8)],
    ));

    let records = engine.classify_all().unwrap();
    assert!((records[0].confidence - 0.8).abs() < 1e-9);
    // The high floor is inclusive.
    assert_eq!(records[0].tier, Tier::NonCoreHigh);
}

#[test]
fn test_raising_the_cutoff_never_adds_candidates() {
    let mut engine = engine();
    engine.ingest(batch(
        Dimension::Operational,
        &[
            ("a", SignalKind::Utilization, 0.05),
            ("b", SignalKind::Utilization, 0.25),
            ("c", SignalKind::Utilization, 0.45),
            ("d", SignalKind::Utilization, 0.70),
            ("e", SignalKind::Utilization, 0.95),
        ],
    ));

    let mut previous: Option<Vec<String>> = None;
    for cutoff in [0.0, 0.25, 0.50, 0.65, 0.80, 1.0] {
        let ids: Vec<String> = engine
            .identify_non_core_assets(cutoff)
            .unwrap()
            .iter()
            .map(|r| r.asset_id.to_string())
            .collect();
        if let Some(previous) = &previous {
            assert!(
                ids.iter().all(|id| previous.contains(id)),
                "cutoff {cutoff} surfaced an asset the looser cutoff did not"
            );
            assert!(ids.len() <= previous.len());
        }
        previous = Some(ids);
    }
}

#[test]
fn test_confidence_and_tier_stay_consistent() {
    let mut engine = engine();
    engine.ingest(batch(
        Dimension::Financial,
        &[
            ("s1", SignalKind::RevenueContribution, 0.01),
            ("s2", SignalKind::ProfitMargin, 0.02),
            ("s3", SignalKind::RevenueContribution, 0.04),
        ],
    ));
    engine.ingest(batch(
        Dimension::Operational,
        &[
            ("s1", SignalKind::Utilization, 0.15),
            ("s2", SignalKind::Utilization, 0.85),
        ],
    ));
    engine.ingest(batch(
        Dimension::Industry,
        &[
            ("s2", SignalKind::BenchmarkShortfall, 0.95),
            ("s3", SignalKind::BenchmarkShortfall, 0.05),
        ],
    ));
    engine.ingest(batch(
        Dimension::Historical,
        &[("s3", SignalKind::IntegrationShortfall, 0.5)],
    ));

    for record in engine.classify_all().unwrap() {
        assert!(
            (0.0..=1.0).contains(&record.confidence),
            "{} confidence {} out of range",
            record.asset_id,
            record.confidence
        );
        let expected = if record.confidence >= 0.80 {
            Tier::NonCoreHigh
        } else if record.confidence >= 0.65 {
            Tier::NonCoreMedium
        } else if record.confidence >= 0.50 {
            Tier::NonCoreLow
        } else {
            Tier::Core
        };
        assert_eq!(record.tier, expected, "{}", record.asset_id);
        assert!(!record.contributing_dimensions.is_empty());
    }
}

#[test]
fn test_signal_weights_shift_the_merged_score() {
    // Two industry readings for the same asset, the severe one carrying
    // more weight. Merged score: (0.9 * 1.5 + 0.3 * 0.75) / 2.25 = 0.7.
    let mut batch = SignalBatch::new(Dimension::Industry);
    batch.record(
        Asset::new("unit-x", "Unit X", AssetCategory::BusinessUnit),
        Signal::new(
            "unit-x",
            Dimension::Industry,
            SignalKind::BenchmarkShortfall,
            0.9,
        )
        .with_weight(1.5),
    );
    batch.signals.push(
        Signal::new(
            "unit-x",
            Dimension::Industry,
            SignalKind::BenchmarkShortfall,
            0.3,
        )
        .with_weight(0.75),
    );

    let mut engine = engine();
    engine.ingest(batch);

    let records = engine.classify_all().unwrap();
    assert!((records[0].confidence - 0.7).abs() < 1e-9);
    assert_eq!(records[0].tier, Tier::NonCoreMedium);
}
