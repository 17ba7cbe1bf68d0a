//! Integration tests rendering reports over the bundled sample dataset.
//!
//! The sample dataset pins its as-of year, so the run below always yields
//! the same 16 candidates and the same summary figures.

use carve_core::{AnalysisConfig, AnalysisEngine, AnalysisRun};
use carve_extractors::extract_all;
use carve_extractors::testing::sample_dataset;
use carve_report::{AssetReport, ReportFormat};

fn sample_run(cutoff: f64) -> AnalysisRun {
    let config = AnalysisConfig::default();
    let mut engine = AnalysisEngine::new(config.clone()).unwrap();
    for batch in extract_all(&sample_dataset(), &config).unwrap() {
        engine.ingest(batch);
    }
    engine.run(cutoff).unwrap()
}

#[test]
fn test_sample_report_summary_matches_run() {
    let run = sample_run(0.6);
    let report = AssetReport::from_run(&run, 50);

    assert_eq!(report.run_id, run.run_id);
    assert!((report.cutoff - 0.6).abs() < f64::EPSILON);
    assert_eq!(report.summary.assets_analyzed, 27);
    assert_eq!(report.summary.assets_scored, 27);
    assert_eq!(report.summary.signals_ingested, 30);
    assert_eq!(report.summary.signals_rejected, 0);
    assert_eq!(report.summary.candidates, 16);
    assert_eq!(report.summary.tiers.high, 8);
    assert_eq!(report.summary.tiers.medium, 6);
    assert_eq!(report.summary.tiers.low, 2);
    assert!(!report.truncated);
    assert!((report.summary.mean_confidence - 0.803125).abs() < 1e-9);
}

#[test]
fn test_sample_csv_lists_every_candidate() {
    let run = sample_run(0.6);
    let report = AssetReport::from_run(&run, 50);

    let csv = report.render(ReportFormat::Csv).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    // Header plus one row per candidate.
    assert_eq!(lines.len(), 17);
    assert_eq!(
        lines[0],
        "asset_id,name,category,tier,confidence,dimensions,rationale"
    );
    assert!(lines[1].starts_with("ar-platform,"));
    assert!(lines[1].contains("non_core_high"));
    assert!(lines[1].contains("1.0000"));
    assert!(lines[16].starts_with("press-xj5,"));
    assert!(lines[16].contains("0.6000"));
}

#[test]
fn test_sample_json_report_round_trips() {
    let run = sample_run(0.6);
    let report = AssetReport::from_run(&run, 50).with_title(sample_dataset().company_name);

    let json = report.render(ReportFormat::Json).unwrap();
    let back: AssetReport = serde_json::from_str(&json).unwrap();

    assert_eq!(back.title.as_deref(), Some("Meridian Industrial Group"));
    assert_eq!(back.summary, report.summary);
    assert_eq!(back.candidates.len(), 16);
    assert_eq!(back.candidates, report.candidates);
}

#[test]
fn test_sample_text_report_shows_tier_breakdown() {
    let run = sample_run(0.6);
    let report = AssetReport::from_run(&run, 50).with_title(sample_dataset().company_name);

    let text = report.render(ReportFormat::Text).unwrap();

    assert!(text.starts_with("Meridian Industrial Group\n"));
    assert!(text.contains("Candidates:       16 (high 8, medium 6, low 2)"));
    assert!(text.contains("Assets analyzed:  27 (27 scored)"));
    assert!(text.contains("1. ar-platform"));

    // Listed in classifier order, strongest first.
    let first = text.find("ar-platform").unwrap();
    let last = text.find("press-xj5").unwrap();
    assert!(first < last);
}

#[test]
fn test_truncation_keeps_the_strongest_candidates() {
    let run = sample_run(0.6);
    let report = AssetReport::from_run(&run, 5);

    assert!(report.truncated);
    assert_eq!(report.candidates.len(), 5);
    assert_eq!(report.summary.candidates, 16);
    assert_eq!(report.candidates[0].asset_id.as_str(), "ar-platform");
    assert_eq!(report.candidates[4].asset_id.as_str(), "quantum-enc");

    let text = report.render(ReportFormat::Text).unwrap();
    assert!(text.contains("Showing the top 5 of 16 candidates."));
    assert!(!text.contains("press-xj5"));
}

#[test]
fn test_rendering_is_deterministic_for_one_report() {
    let run = sample_run(0.6);
    let report = AssetReport::from_run(&run, 50);

    for format in [ReportFormat::Json, ReportFormat::Csv, ReportFormat::Text] {
        let first = report.render(format).unwrap();
        let second = report.render(format).unwrap();
        assert_eq!(first, second);
    }
}
