//! Configuration validation for the Carveout CLI.
//!
//! This module provides startup validation so misconfigured thresholds are
//! reported together, with colored output, before a run begins.

use crate::config::AppConfig;
use carve_report::ReportFormat;
use colored::Colorize;

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Critical errors that prevent a run.
    pub errors: Vec<String>,
    /// Warnings that should be addressed but don't prevent a run.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a new empty validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns true if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Merges another validation result into this one.
    #[allow(dead_code)]
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Prints the validation result to the console.
    pub fn print(&self) {
        if !self.warnings.is_empty() {
            println!();
            println!("{}", "Configuration Warnings:".yellow().bold());
            for warning in &self.warnings {
                println!("  {} {}", "⚠".yellow(), warning);
            }
        }

        if !self.errors.is_empty() {
            println!();
            println!("{}", "Configuration Errors:".red().bold());
            for error in &self.errors {
                println!("  {} {}", "✗".red(), error);
            }
        }

        if self.errors.is_empty() && self.warnings.is_empty() {
            println!("  {} Configuration OK", "✓".green());
        }
    }
}

/// Validates application configuration before a run.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the application configuration.
    ///
    /// Returns a ValidationResult containing any errors and warnings found.
    pub fn validate(config: &AppConfig) -> ValidationResult {
        let mut result = ValidationResult::new();

        Self::validate_weights(config, &mut result);
        Self::validate_tiers(config, &mut result);
        Self::validate_cutoff(config, &mut result);
        Self::validate_scoring(config, &mut result);
        Self::validate_limits(config, &mut result);
        Self::validate_logging(config, &mut result);
        Self::validate_report_format(config, &mut result);

        result
    }

    /// Validates the dimension weights.
    fn validate_weights(config: &AppConfig, result: &mut ValidationResult) {
        if let Err(e) = config.analysis.weights.validate() {
            result.add_error(format!("Invalid analysis weights: {}", e));
        }
    }

    /// Validates tier thresholds and flags unusually permissive floors.
    fn validate_tiers(config: &AppConfig, result: &mut ValidationResult) {
        let tiers = &config.analysis.tiers;
        if let Err(e) = tiers.validate() {
            result.add_error(format!("Invalid tier thresholds: {}", e));
            return;
        }

        if tiers.low < 0.3 {
            result.add_warning(format!(
                "Low tier threshold {} is unusually permissive. \
                 Most scored assets will classify as non-core candidates.",
                tiers.low
            ));
        }
    }

    /// Validates the default cutoff against the tier floors.
    fn validate_cutoff(config: &AppConfig, result: &mut ValidationResult) {
        let cutoff = config.analysis.default_cutoff;
        if !cutoff.is_finite() || !(0.0..=1.0).contains(&cutoff) {
            result.add_error(format!(
                "default_cutoff {} is outside the valid range [0, 1]",
                cutoff
            ));
            return;
        }

        if cutoff < config.analysis.tiers.low {
            result.add_warning(format!(
                "default_cutoff {} sits below the low tier threshold {}. \
                 Reports will list candidates that classify as core.",
                cutoff, config.analysis.tiers.low
            ));
        }
    }

    /// Validates the scoring thresholds.
    fn validate_scoring(config: &AppConfig, result: &mut ValidationResult) {
        let scoring = &config.analysis.scoring;
        if let Err(e) = scoring.validate() {
            result.add_error(format!("Invalid scoring thresholds: {}", e));
            return;
        }

        if scoring.low_utilization > 0.8 {
            result.add_warning(format!(
                "low_utilization threshold {} will flag most assets. \
                 Typical deployments sit near 0.5.",
                scoring.low_utilization
            ));
        }
    }

    /// Validates the candidate caps.
    fn validate_limits(config: &AppConfig, result: &mut ValidationResult) {
        if config.analysis.max_assets == 0 {
            result.add_error("analysis.max_assets must be at least 1");
        }
        if config.report.max_assets == Some(0) {
            result.add_error("report.max_assets must be at least 1 when set");
        }

        let effective = config.effective_max_assets(None);
        if effective > 500 {
            result.add_warning(format!(
                "max_assets {} will produce very long reports",
                effective
            ));
        }
    }

    /// Validates the configured log level.
    fn validate_logging(config: &AppConfig, result: &mut ValidationResult) {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            result.add_error(format!(
                "Invalid log level '{}'. Must be one of: {}",
                config.logging.level,
                valid_levels.join(", ")
            ));
        }
    }

    /// Validates the configured report format.
    fn validate_report_format(config: &AppConfig, result: &mut ValidationResult) {
        if ReportFormat::parse(&config.report.format).is_none() {
            result.add_error(format!(
                "Invalid report format '{}'. Must be one of: text, json, csv",
                config.report.format
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> AppConfig {
        AppConfig::default()
    }

    #[test]
    fn test_validation_result_operations() {
        let mut result = ValidationResult::new();
        assert!(!result.has_errors());
        assert!(!result.has_warnings());

        result.add_error("Test error");
        assert!(result.has_errors());

        result.add_warning("Test warning");
        assert!(result.has_warnings());

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::new();
        result1.add_error("Error 1");

        let mut result2 = ValidationResult::new();
        result2.add_error("Error 2");
        result2.add_warning("Warning 1");

        result1.merge(result2);

        assert_eq!(result1.errors.len(), 2);
        assert_eq!(result1.warnings.len(), 1);
    }

    #[test]
    fn test_default_config_is_clean() {
        let result = ConfigValidator::validate(&default_config());
        assert!(!result.has_errors());
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_negative_weight_is_an_error() {
        let mut config = default_config();
        config.analysis.weights.industry = -1.5;

        let mut result = ValidationResult::new();
        ConfigValidator::validate_weights(&config, &mut result);

        assert!(result.has_errors());
        assert!(result.errors[0].contains("industry"));
    }

    #[test]
    fn test_inverted_tiers_are_an_error() {
        let mut config = default_config();
        config.analysis.tiers.high = 0.5;
        config.analysis.tiers.medium = 0.7;

        let mut result = ValidationResult::new();
        ConfigValidator::validate_tiers(&config, &mut result);

        assert!(result.has_errors());
    }

    #[test]
    fn test_permissive_low_tier_warns() {
        let mut config = default_config();
        config.analysis.tiers.low = 0.2;

        let mut result = ValidationResult::new();
        ConfigValidator::validate_tiers(&config, &mut result);

        assert!(!result.has_errors());
        assert!(result.has_warnings());
    }

    #[test]
    fn test_cutoff_out_of_range_is_an_error() {
        let mut config = default_config();
        config.analysis.default_cutoff = 1.5;

        let mut result = ValidationResult::new();
        ConfigValidator::validate_cutoff(&config, &mut result);

        assert!(result.has_errors());
    }

    #[test]
    fn test_cutoff_below_low_tier_warns() {
        let mut config = default_config();
        config.analysis.default_cutoff = 0.3;

        let mut result = ValidationResult::new();
        ConfigValidator::validate_cutoff(&config, &mut result);

        assert!(!result.has_errors());
        assert!(result.has_warnings());
        assert!(result.warnings[0].contains("core"));
    }

    #[test]
    fn test_zero_max_assets_is_an_error() {
        let mut config = default_config();
        config.analysis.max_assets = 0;

        let mut result = ValidationResult::new();
        ConfigValidator::validate_limits(&config, &mut result);

        assert!(result.has_errors());
    }

    #[test]
    fn test_huge_max_assets_warns() {
        let mut config = default_config();
        config.report.max_assets = Some(1000);

        let mut result = ValidationResult::new();
        ConfigValidator::validate_limits(&config, &mut result);

        assert!(!result.has_errors());
        assert!(result.has_warnings());
    }

    #[test]
    fn test_invalid_log_level_is_an_error() {
        let mut config = default_config();
        config.logging.level = "verbose".to_string();

        let mut result = ValidationResult::new();
        ConfigValidator::validate_logging(&config, &mut result);

        assert!(result.has_errors());
    }

    #[test]
    fn test_invalid_report_format_is_an_error() {
        let mut config = default_config();
        config.report.format = "xml".to_string();

        let mut result = ValidationResult::new();
        ConfigValidator::validate_report_format(&config, &mut result);

        assert!(result.has_errors());
    }
}
