//! Configuration loading for the Carveout CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use carve_core::AnalysisConfig;
use carve_report::ReportFormat;

/// Application configuration.
///
/// Every section and field has a default, so a partial file, or no file at
/// all, is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Analysis pipeline settings.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSection,

    /// Report settings.
    #[serde(default)]
    pub report: ReportSection,
}

impl AppConfig {
    /// Loads configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Resolves the candidate cap for one run.
    ///
    /// A command-line override wins, then the report section, then the
    /// analysis configuration.
    pub fn effective_max_assets(&self, flag: Option<usize>) -> usize {
        flag.or(self.report.max_assets)
            .unwrap_or(self.analysis.max_assets)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to use JSON format.
    #[serde(default)]
    pub json_format: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
        }
    }
}

impl LoggingSection {
    /// The configured level as a tracing level, falling back to INFO for
    /// strings the validator would flag anyway.
    pub fn tracing_level(&self) -> tracing::Level {
        match self.level.to_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => tracing::Level::INFO,
        }
    }
}

/// Report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    /// Default output format (text, json, csv).
    #[serde(default = "default_report_format")]
    pub format: String,

    /// Candidate cap overriding the analysis configuration.
    #[serde(default)]
    pub max_assets: Option<usize>,
}

fn default_report_format() -> String {
    "text".to_string()
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            format: default_report_format(),
            max_assets: None,
        }
    }
}

impl ReportSection {
    /// The configured format, falling back to text for strings the
    /// validator would flag anyway.
    pub fn resolved_format(&self) -> ReportFormat {
        ReportFormat::parse(&self.format).unwrap_or_default()
    }
}
