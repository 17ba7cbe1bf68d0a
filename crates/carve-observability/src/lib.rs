//! # carve-observability
//!
//! Logging infrastructure for the Carveout analyzer.
//!
//! This crate owns tracing subscriber setup so every binary configures
//! logging the same way: an `EnvFilter` honoring `RUST_LOG`, a fmt layer,
//! and optional JSON output for log aggregation.

pub mod logging;

pub use logging::init_logging;
