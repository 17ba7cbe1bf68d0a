//! Core data models for the screening pipeline.

pub mod asset;
pub mod classification;
pub mod score;
pub mod signal;

pub use asset::{Asset, AssetAttributes, AssetCategory, AssetId};
pub use classification::{Classification, Tier};
pub use score::{Confidence, DimensionScore};
pub use signal::{Dimension, Signal, SignalKind};
