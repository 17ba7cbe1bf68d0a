//! # carve-core
//!
//! Core domain for identifying non-core assets in a corporate portfolio.
//! Extractors feed dimension-tagged signals into an [`AnalysisEngine`],
//! which scores each asset per dimension, aggregates the scores into a
//! weighted divestiture confidence, and classifies every asset into a
//! candidate tier.
//!
//! The pipeline is deterministic: the same assets, signals, and
//! configuration always produce the same classification list, in the same
//! order.

pub mod augment;
pub mod classifier;
pub mod confidence;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod registry;
pub mod scoring;

pub use augment::{Augmenter, RuleBasedAugmenter};
pub use classifier::AssetClassifier;
pub use confidence::ConfidenceCalculator;
pub use config::{
    AnalysisConfig, DimensionWeights, ScoringThresholds, TierThresholds,
};
pub use engine::{AnalysisEngine, AnalysisRun, RunStats, SignalBatch};
pub use error::{AnalysisError, ConfigError, SignalError};
pub use models::{
    Asset, AssetAttributes, AssetCategory, AssetId, Classification, Confidence,
    Dimension, DimensionScore, Signal, SignalKind, Tier,
};
pub use registry::AssetRegistry;
pub use scoring::{AssetScorer, RejectedSignal, ScoreSet};
