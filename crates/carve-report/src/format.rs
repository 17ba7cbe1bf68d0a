//! Report output formats.

use serde::{Deserialize, Serialize};

/// Supported rendering formats for an asset report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable aligned summary.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
    /// CSV with one candidate per row.
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns the MIME type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text/plain",
            ReportFormat::Json => "application/json",
            ReportFormat::Csv => "text/csv",
        }
    }

    /// Parses a report format from a string, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "csv" => Some(ReportFormat::Csv),
            _ => None,
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportFormat::parse(s).ok_or_else(|| format!("Invalid report format: {}", s))
    }
}
