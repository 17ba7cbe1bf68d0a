//! Analysis engine tying extractor output to the classification pipeline.
//!
//! One engine instance handles one analysis run: extractors ingest their
//! batches, the registry freezes, and every evaluation walks scoring,
//! confidence aggregation, and classification over the same frozen inputs.

use crate::augment::Augmenter;
use crate::classifier::AssetClassifier;
use crate::confidence::ConfidenceCalculator;
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, ConfigError};
use crate::models::{Asset, AssetId, Classification, Dimension, Signal};
use crate::registry::AssetRegistry;
use crate::scoring::{AssetScorer, RejectedSignal};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Assets and signals produced by one extractor pass over one dimension.
#[derive(Debug, Clone)]
pub struct SignalBatch {
    /// Dimension every signal in this batch belongs to.
    pub dimension: Dimension,
    /// Assets declared by the extractor, first reference wins.
    pub assets: Vec<Asset>,
    /// Signals for the batch dimension.
    pub signals: Vec<Signal>,
}

impl SignalBatch {
    /// Creates an empty batch for a dimension.
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            assets: Vec::new(),
            signals: Vec::new(),
        }
    }

    /// Declares an asset and one signal for it in a single step.
    pub fn record(&mut self, asset: Asset, signal: Signal) {
        self.assets.push(asset);
        self.signals.push(signal);
    }

    /// Whether the batch carries no signals.
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

/// Counters describing one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Assets declared by extractors.
    pub assets_registered: usize,
    /// Signals accepted at ingest.
    pub signals_ingested: usize,
    /// Signals dropped during validation.
    pub signals_rejected: usize,
    /// Assets that produced at least one score.
    pub assets_scored: usize,
}

/// Record of one completed analysis invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRun {
    /// Unique id for this run.
    pub run_id: Uuid,
    /// When the evaluation started.
    pub started_at: DateTime<Utc>,
    /// When the evaluation finished.
    pub completed_at: DateTime<Utc>,
    /// Cutoff applied to the candidate list.
    pub cutoff: f64,
    /// Run counters.
    pub stats: RunStats,
    /// Candidates clearing the cutoff, in classifier order.
    pub candidates: Vec<Classification>,
}

/// Classifications plus the signals rejected while producing them.
struct Evaluation {
    classifications: Vec<Classification>,
    rejected: Vec<RejectedSignal>,
}

/// Coordinates extractor output through scoring, confidence, and
/// classification.
pub struct AnalysisEngine {
    config: AnalysisConfig,
    registry: AssetRegistry,
    signals: Vec<Signal>,
    augmenter: Option<Box<dyn Augmenter>>,
}

impl AnalysisEngine {
    /// Creates an engine, validating the configuration once up front.
    pub fn new(config: AnalysisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            registry: AssetRegistry::new(),
            signals: Vec::new(),
            augmenter: None,
        })
    }

    /// Attaches an augmenter to fill rationale text on classifications.
    pub fn with_augmenter(mut self, augmenter: Box<dyn Augmenter>) -> Self {
        debug!(augmenter = augmenter.name(), "augmenter attached");
        self.augmenter = Some(augmenter);
        self
    }

    /// The validated configuration the engine runs with.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The assets declared so far.
    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    /// Number of signals currently held.
    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }

    /// Ingests one extractor's batch.
    ///
    /// Re-ingesting a dimension replaces that dimension's earlier signals,
    /// so extractor reruns overwrite rather than accumulate. Signals whose
    /// own dimension disagrees with the batch are dropped.
    pub fn ingest(&mut self, batch: SignalBatch) {
        let dimension = batch.dimension;
        for asset in batch.assets {
            self.registry.register(asset);
        }

        self.signals.retain(|signal| signal.dimension != dimension);
        let mut accepted = 0usize;
        for signal in batch.signals {
            if signal.dimension != dimension {
                warn!(
                    asset_id = %signal.asset_id,
                    expected = %dimension,
                    actual = %signal.dimension,
                    "signal dimension does not match batch, dropping"
                );
                continue;
            }
            self.signals.push(signal);
            accepted += 1;
        }
        debug!(dimension = %dimension, signals = accepted, "batch ingested");
    }

    /// Classifies every scored asset, with no cutoff applied.
    ///
    /// The result is total over assets holding at least one score.
    pub fn classify_all(&mut self) -> Result<Vec<Classification>, AnalysisError> {
        Ok(self.evaluate()?.classifications)
    }

    /// Returns the non-core candidates whose confidence clears `threshold`.
    ///
    /// The threshold must lie in [0, 1]; anything else fails with
    /// [`AnalysisError::InvalidThreshold`] before any evaluation happens.
    pub fn identify_non_core_assets(
        &mut self,
        threshold: f64,
    ) -> Result<Vec<Classification>, AnalysisError> {
        check_threshold(threshold)?;
        let evaluation = self.evaluate()?;
        Ok(apply_cutoff(evaluation.classifications, threshold))
    }

    /// Like [`identify_non_core_assets`](Self::identify_non_core_assets),
    /// using the configured default cutoff.
    pub fn identify_with_default_cutoff(
        &mut self,
    ) -> Result<Vec<Classification>, AnalysisError> {
        let cutoff = self.config.default_cutoff;
        self.identify_non_core_assets(cutoff)
    }

    /// Runs a full evaluation and wraps the outcome in an [`AnalysisRun`].
    pub fn run(&mut self, threshold: f64) -> Result<AnalysisRun, AnalysisError> {
        check_threshold(threshold)?;
        let started_at = Utc::now();
        let signals_ingested = self.signals.len();

        let evaluation = self.evaluate()?;
        let assets_scored = evaluation.classifications.len();
        let candidates = apply_cutoff(evaluation.classifications, threshold);

        info!(
            candidates = candidates.len(),
            assets_scored,
            cutoff = threshold,
            "analysis run complete"
        );
        Ok(AnalysisRun {
            run_id: Uuid::new_v4(),
            started_at,
            completed_at: Utc::now(),
            cutoff: threshold,
            stats: RunStats {
                assets_registered: self.registry.len(),
                signals_ingested,
                signals_rejected: evaluation.rejected.len(),
                assets_scored,
            },
            candidates,
        })
    }

    /// Walks the pipeline over the current signals.
    fn evaluate(&mut self) -> Result<Evaluation, AnalysisError> {
        self.registry.freeze();

        let scorer = AssetScorer::new(self.config.scoring.clone());
        let calculator = ConfidenceCalculator::new(self.config.weights.clone());
        let classifier = AssetClassifier::new(self.config.tiers);

        let mut by_asset: BTreeMap<&AssetId, Vec<&Signal>> = BTreeMap::new();
        for signal in &self.signals {
            by_asset.entry(&signal.asset_id).or_default().push(signal);
        }

        let mut rejected = Vec::new();
        let mut confidences = Vec::new();
        for (asset_id, signals) in by_asset {
            if !self.registry.contains(asset_id) {
                return Err(AnalysisError::MissingAsset(asset_id.clone()));
            }
            let outcome = scorer.score_asset(asset_id, &signals);
            rejected.extend(outcome.rejected);
            if let Some(confidence) = calculator.confidence(&outcome.scores) {
                confidences.push(confidence);
            }
        }

        let mut classifications = classifier.classify(&self.registry, confidences)?;
        if let Some(augmenter) = &self.augmenter {
            for record in &mut classifications {
                if let Some(asset) = self.registry.get(&record.asset_id) {
                    let rationale = augmenter.explain(asset, record);
                    record.rationale = rationale;
                }
            }
        }

        debug!(
            classified = classifications.len(),
            rejected = rejected.len(),
            "pipeline evaluated"
        );
        Ok(Evaluation {
            classifications,
            rejected,
        })
    }
}

fn check_threshold(threshold: f64) -> Result<(), AnalysisError> {
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err(AnalysisError::InvalidThreshold(threshold));
    }
    Ok(())
}

fn apply_cutoff(classifications: Vec<Classification>, cutoff: f64) -> Vec<Classification> {
    classifications
        .into_iter()
        .filter(|record| record.confidence >= cutoff)
        .collect()
}
