//! # carve-extractors
//!
//! Dataset records and the four dimension signal extractors. Each extractor
//! reads its slice of a [`CompanyDataset`] and emits a dimension-tagged
//! signal batch for the analysis engine; together they cover the financial,
//! operational, industry, and historical evidence for non-core assets.

pub mod dataset;
pub mod financial;
pub mod historical;
pub mod industry;
pub mod operational;
pub mod testing;
pub mod traits;

pub use dataset::{CompanyDataset, InitiativeStatus, MarketRelevance};
pub use financial::FinancialExtractor;
pub use historical::HistoricalExtractor;
pub use industry::{IndustryExtractor, Severity};
pub use operational::OperationalExtractor;
pub use traits::{ExtractorError, SignalExtractor};

use carve_core::{AnalysisConfig, SignalBatch};
use tracing::info;

/// Runs all four extractors over a dataset, one batch per dimension.
pub fn extract_all(
    dataset: &CompanyDataset,
    config: &AnalysisConfig,
) -> Result<Vec<SignalBatch>, ExtractorError> {
    let extractors: [&dyn SignalExtractor; 4] = [
        &FinancialExtractor,
        &OperationalExtractor,
        &IndustryExtractor,
        &HistoricalExtractor,
    ];

    let mut batches = Vec::with_capacity(extractors.len());
    for extractor in extractors {
        let batch = extractor.extract(dataset, config)?;
        info!(
            extractor = extractor.name(),
            assets = batch.assets.len(),
            signals = batch.signals.len(),
            "extraction complete"
        );
        batches.push(batch);
    }
    Ok(batches)
}
