//! Error types for the analysis core.
//!
//! All failures here are deterministic given input; there are no transient
//! classes and no retry semantics.

use crate::models::{AssetId, SignalKind};
use thiserror::Error;

/// Errors surfaced by engine calls.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The caller-supplied cutoff is outside the valid range.
    #[error("classification threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),

    /// A signal referenced an asset no extractor ever declared.
    ///
    /// This indicates a bug in the upstream extractor and is fatal for the
    /// run.
    #[error("signal references unknown asset '{0}'")]
    MissingAsset(AssetId),

    /// The analysis configuration was rejected at construction.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Rejected configuration values, reported once at engine construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Dimension weights must be strictly positive so that renormalization
    /// over present dimensions never divides by zero.
    #[error("dimension weight for {dimension} must be a positive finite number, got {value}")]
    NonPositiveWeight { dimension: &'static str, value: f64 },

    /// A tier threshold fell outside [0, 1].
    #[error("tier threshold '{name}' must be within [0, 1], got {value}")]
    TierOutOfRange { name: &'static str, value: f64 },

    /// Tier thresholds must decrease from high to low.
    #[error("tier thresholds must satisfy high >= medium >= low (got {high}, {medium}, {low})")]
    TierOrdering { high: f64, medium: f64, low: f64 },

    /// The configured default cutoff fell outside [0, 1].
    #[error("default cutoff {0} is outside [0, 1]")]
    CutoffOutOfRange(f64),

    /// A ratio-valued scoring threshold fell outside (0, 1].
    #[error("scoring threshold '{name}' must be within (0, 1], got {value}")]
    ScoringOutOfRange { name: &'static str, value: f64 },

    /// A year-valued scoring window was shorter than one year.
    #[error("scoring window '{name}' must be at least one year, got {value}")]
    WindowTooShort { name: &'static str, value: u32 },

    /// The report asset cap must admit at least one asset.
    #[error("max_assets must be at least 1")]
    ZeroMaxAssets,
}

/// Rejection reason for a malformed signal.
///
/// Invalid signals are dropped with a warning; the affected dimension is
/// excluded for that asset while its other dimensions still score.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalError {
    /// The raw indicator value was non-finite or outside [0, 1].
    #[error("signal value {value} for {kind} is outside [0, 1]")]
    ValueOutOfRange { kind: SignalKind, value: f64 },

    /// The merge weight was non-finite or not positive.
    #[error("signal weight {weight} is not a positive finite number")]
    InvalidWeight { weight: f64 },
}
