//! Report assembly and rendering.
//!
//! An [`AssetReport`] is assembled once from a completed [`AnalysisRun`] and
//! rendered on demand. Rendering only produces strings; writing them to a
//! file or terminal is the caller's concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use carve_core::{AnalysisRun, Classification, Dimension, Tier};

use crate::format::ReportFormat;

/// Error type for report rendering.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Serialization error while rendering JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Candidate counts per non-core tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    /// Strong divestiture candidates.
    pub high: usize,
    /// Likely divestiture candidates.
    pub medium: usize,
    /// Marginal divestiture candidates.
    pub low: usize,
}

/// Aggregate figures for one analysis run.
///
/// The summary always covers the whole run, even when the listed candidates
/// were truncated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Assets declared by the extractors.
    pub assets_analyzed: usize,
    /// Assets that produced at least one dimension score.
    pub assets_scored: usize,
    /// Signals accepted at ingest.
    pub signals_ingested: usize,
    /// Signals dropped during scoring.
    pub signals_rejected: usize,
    /// Candidates clearing the cutoff.
    pub candidates: usize,
    /// Candidate counts per tier.
    pub tiers: TierCounts,
    /// Mean confidence across all candidates, 0.0 when there are none.
    pub mean_confidence: f64,
}

impl ReportSummary {
    fn from_run(run: &AnalysisRun) -> Self {
        let mut tiers = TierCounts::default();
        let mut total_confidence = 0.0;

        for candidate in &run.candidates {
            match candidate.tier {
                Tier::NonCoreHigh => tiers.high += 1,
                Tier::NonCoreMedium => tiers.medium += 1,
                Tier::NonCoreLow => tiers.low += 1,
                Tier::Core => {}
            }
            total_confidence += candidate.confidence;
        }

        let mean_confidence = if run.candidates.is_empty() {
            0.0
        } else {
            total_confidence / run.candidates.len() as f64
        };

        Self {
            assets_analyzed: run.stats.assets_registered,
            assets_scored: run.stats.assets_scored,
            signals_ingested: run.stats.signals_ingested,
            signals_rejected: run.stats.signals_rejected,
            candidates: run.candidates.len(),
            tiers,
            mean_confidence,
        }
    }
}

/// Renderable report over one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetReport {
    /// Unique id for this report.
    pub report_id: Uuid,
    /// Run the report describes.
    pub run_id: Uuid,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run finished.
    pub completed_at: DateTime<Utc>,
    /// Cutoff applied to the candidate list.
    pub cutoff: f64,
    /// Optional title, typically the company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Aggregate figures over the whole run.
    pub summary: ReportSummary,
    /// Candidates in classifier order, truncated to the configured maximum.
    pub candidates: Vec<Classification>,
    /// True when candidates were dropped to honor the maximum.
    pub truncated: bool,
}

impl AssetReport {
    /// Assembles a report from a completed run.
    ///
    /// The summary is computed over every candidate in the run; only the
    /// listed `candidates` are cut down to `max_assets`.
    pub fn from_run(run: &AnalysisRun, max_assets: usize) -> Self {
        let summary = ReportSummary::from_run(run);
        let mut candidates = run.candidates.clone();
        let truncated = candidates.len() > max_assets;
        candidates.truncate(max_assets);

        debug!(
            run_id = %run.run_id,
            listed = candidates.len(),
            truncated,
            "assembled asset report"
        );

        Self {
            report_id: Uuid::new_v4(),
            run_id: run.run_id,
            generated_at: Utc::now(),
            started_at: run.started_at,
            completed_at: run.completed_at,
            cutoff: run.cutoff,
            title: None,
            summary,
            candidates,
            truncated,
        }
    }

    /// Sets the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Renders the report in the requested format.
    pub fn render(&self, format: ReportFormat) -> Result<String, ReportError> {
        match format {
            ReportFormat::Json => self.render_json(),
            ReportFormat::Csv => Ok(self.render_csv()),
            ReportFormat::Text => Ok(self.render_text()),
        }
    }

    /// Renders the full report as pretty-printed JSON.
    fn render_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the candidate list as CSV.
    fn render_csv(&self) -> String {
        let mut csv = String::new();

        // Header
        csv.push_str("asset_id,name,category,tier,confidence,dimensions,rationale\n");

        // Rows
        for candidate in &self.candidates {
            let rationale = candidate
                .rationale
                .as_deref()
                .map(escape_csv_field)
                .unwrap_or_default();

            let row = format!(
                "{},{},{},{},{:.4},{},{}\n",
                candidate.asset_id,
                escape_csv_field(&candidate.name),
                escape_csv_field(&candidate.category.to_string()),
                candidate.tier,
                candidate.confidence,
                join_dimensions(&candidate.contributing_dimensions, ";"),
                rationale,
            );
            csv.push_str(&row);
        }

        csv
    }

    /// Renders an aligned plain-text summary.
    fn render_text(&self) -> String {
        let mut out = String::new();

        let title = self.title.as_deref().unwrap_or("Non-Core Asset Report");
        out.push_str(title);
        out.push('\n');
        out.push_str(&"─".repeat(title.chars().count()));
        out.push('\n');
        out.push_str(&format!("Run:       {}\n", self.run_id));
        out.push_str(&format!(
            "Generated: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out.push_str(&format!("Cutoff:    {:.2}\n", self.cutoff));
        out.push('\n');

        out.push_str("Summary\n");
        out.push_str(&format!(
            "  Assets analyzed:  {} ({} scored)\n",
            self.summary.assets_analyzed, self.summary.assets_scored
        ));
        out.push_str(&format!(
            "  Signals ingested: {} ({} rejected)\n",
            self.summary.signals_ingested, self.summary.signals_rejected
        ));
        out.push_str(&format!(
            "  Candidates:       {} (high {}, medium {}, low {})\n",
            self.summary.candidates,
            self.summary.tiers.high,
            self.summary.tiers.medium,
            self.summary.tiers.low
        ));
        out.push_str(&format!(
            "  Mean confidence:  {:.2}\n",
            self.summary.mean_confidence
        ));
        out.push('\n');

        if self.candidates.is_empty() {
            out.push_str("No candidates cleared the cutoff.\n");
            return out;
        }

        out.push_str("Candidates\n");
        for (rank, candidate) in self.candidates.iter().enumerate() {
            out.push_str(&format!(
                "  {:>3}. {:<22} {:<28} {:<8} {:.2}  [{}]\n",
                rank + 1,
                candidate.asset_id,
                candidate.name,
                tier_label(candidate.tier),
                candidate.confidence,
                join_dimensions(&candidate.contributing_dimensions, ", "),
            ));
            if let Some(rationale) = &candidate.rationale {
                out.push_str(&format!("       {}\n", rationale));
            }
        }

        if self.truncated {
            out.push_str(&format!(
                "\nShowing the top {} of {} candidates.\n",
                self.candidates.len(),
                self.summary.candidates
            ));
        }

        out
    }
}

/// Short tier label for text output.
fn tier_label(tier: Tier) -> &'static str {
    match tier {
        Tier::NonCoreHigh => "high",
        Tier::NonCoreMedium => "medium",
        Tier::NonCoreLow => "low",
        Tier::Core => "core",
    }
}

fn join_dimensions(dimensions: &[Dimension], separator: &str) -> String {
    dimensions
        .iter()
        .map(Dimension::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Escapes a string for CSV format.
fn escape_csv_field(field: &str) -> String {
    // If the field contains special characters, quote it
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
