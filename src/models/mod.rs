//! Data models module
//!
//! Contains the benchmark result record and per-phase measurements.

pub mod result;

pub use result::{BenchmarkResult, PhaseReport};
