//! # carve-report
//!
//! Report assembly and rendering for completed analysis runs.
//!
//! An [`AssetReport`] captures run metadata, aggregate figures, and the
//! candidate list, and renders as pretty JSON, CSV, or an aligned text
//! summary. Rendering is pure string production; file handling stays with
//! the caller.

pub mod format;
pub mod report;

pub use format::ReportFormat;
pub use report::{AssetReport, ReportError, ReportSummary, TierCounts};
