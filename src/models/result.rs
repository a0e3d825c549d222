//! Benchmark result data models
//!
//! `BenchmarkResult` is the record printed on stdout; its field names are
//! shared with the companion implementations and must not change.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::util::units::{
    clamp_elapsed, format_bytes, format_duration, format_throughput, throughput_mbs,
};
use crate::Result;

/// Outcome of one benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Label of the implementation that produced the record
    pub language: String,
    /// Requested file size in megabytes, as given on the command line
    pub file_size_mb: u32,
    /// Seconds spent reading the copy back
    pub read_time: f64,
    /// Seconds spent copying the input (read + write)
    pub write_time: f64,
    pub read_throughput_mbs: f64,
    pub write_throughput_mbs: f64,
}

/// Measurements of a single timed phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseReport {
    /// Bytes actually moved through the buffer
    pub bytes: u64,
    /// Wall-clock time of the loop, before clamping
    pub elapsed: Duration,
}

impl PhaseReport {
    pub fn new(bytes: u64, elapsed: Duration) -> Self {
        Self { bytes, elapsed }
    }

    /// One-line description for log output
    pub fn describe(&self) -> String {
        format!("{} in {}", format_bytes(self.bytes), format_duration(self.elapsed))
    }
}

impl BenchmarkResult {
    /// Build a result from the two phase durations.
    ///
    /// Durations shorter than [`crate::util::MIN_PHASE_TIME`] are reported as
    /// that minimum, so both throughputs are always finite.
    pub fn from_phases(
        language: impl Into<String>,
        file_size_mb: u32,
        read_elapsed: Duration,
        write_elapsed: Duration,
    ) -> Self {
        let read_time = clamp_elapsed(read_elapsed).as_secs_f64();
        let write_time = clamp_elapsed(write_elapsed).as_secs_f64();

        Self {
            language: language.into(),
            file_size_mb,
            read_time,
            write_time,
            read_throughput_mbs: throughput_mbs(file_size_mb, read_time),
            write_throughput_mbs: throughput_mbs(file_size_mb, write_time),
        }
    }

    /// Compact single-line JSON encoding, without a trailing newline
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Human-readable summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} - {} MB - write {:.4}s ({}) - read {:.4}s ({})",
            self.language,
            self.file_size_mb,
            self.write_time,
            format_throughput(self.write_throughput_mbs),
            self.read_time,
            format_throughput(self.read_throughput_mbs),
        )
    }
}
