//! The extractor trait and its error type.

use crate::dataset::CompanyDataset;
use carve_core::{AnalysisConfig, Dimension, SignalBatch};
use thiserror::Error;
use tracing::warn;

/// Errors raised while turning a dataset into signals.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// The dataset JSON could not be parsed.
    #[error("failed to parse dataset JSON")]
    Parse(#[from] serde_json::Error),

    /// A record carries an unusable asset identifier.
    #[error("record in `{section}` has a blank asset id")]
    BlankAssetId { section: &'static str },
}

/// One extractor per analytical dimension.
///
/// An extractor reads its slice of an already loaded dataset and emits a
/// [`SignalBatch`] tagged with its dimension. Extractors never touch the
/// network or the filesystem.
pub trait SignalExtractor {
    /// Dimension every emitted signal belongs to.
    fn dimension(&self) -> Dimension;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Scans the dataset and emits signals for suspect records.
    fn extract(
        &self,
        dataset: &CompanyDataset,
        config: &AnalysisConfig,
    ) -> Result<SignalBatch, ExtractorError>;
}

/// Rejects blank asset ids before they can collide in the registry.
pub(crate) fn check_asset_id(
    section: &'static str,
    asset_id: &str,
) -> Result<(), ExtractorError> {
    if asset_id.trim().is_empty() {
        return Err(ExtractorError::BlankAssetId { section });
    }
    Ok(())
}

/// Whether a ratio reading is usable; out-of-range readings are skipped.
pub(crate) fn usable_ratio(section: &'static str, asset_id: &str, value: f64) -> bool {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        true
    } else {
        warn!(section, asset_id, value, "reading outside [0, 1], skipping record");
        false
    }
}
