//! Benchmark engine module
//!
//! Contains the sequential copy/read benchmark.

pub mod sequential;

pub use sequential::SequentialBenchmark;

use crate::config::BenchConfig;
use crate::models::BenchmarkResult;
use crate::Result;

/// Validate `config` and run a single benchmark for `file_size_mb`
pub fn run_benchmark(config: BenchConfig, file_size_mb: u32) -> Result<BenchmarkResult> {
    SequentialBenchmark::new(config)?.run(file_size_mb)
}
