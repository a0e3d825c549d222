//! Utility functions module
//!
//! Throughput math plus formatting helpers for log output.

pub mod units;

pub use units::{
    clamp_elapsed, format_bytes, format_duration, format_throughput, throughput_mbs,
    MIN_PHASE_TIME,
};
