//! Throughput math and human-readable formatting
//!
//! The JSON record carries raw seconds and MB/s; the formatting helpers are
//! only used for log lines on stderr.

use std::time::Duration;

/// Shortest duration a phase is ever reported as.
///
/// A phase that completes inside one clock tick would otherwise divide by
/// zero. Reporting the clamped value keeps `throughput * time == size`.
pub const MIN_PHASE_TIME: Duration = Duration::from_nanos(1);

/// Clamp a measured phase duration to [`MIN_PHASE_TIME`]
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use iobench::util::units::{clamp_elapsed, MIN_PHASE_TIME};
///
/// assert_eq!(clamp_elapsed(Duration::ZERO), MIN_PHASE_TIME);
/// assert_eq!(clamp_elapsed(Duration::from_millis(3)), Duration::from_millis(3));
/// ```
pub fn clamp_elapsed(elapsed: Duration) -> Duration {
    elapsed.max(MIN_PHASE_TIME)
}

/// Throughput in MB/s for a phase that moved `file_size_mb` megabytes in
/// `seconds`. The nominal size is the numerator, not the bytes actually
/// transferred.
///
/// # Examples
/// ```
/// use iobench::util::units::throughput_mbs;
///
/// assert!((throughput_mbs(100, 2.0) - 50.0).abs() < f64::EPSILON);
/// ```
pub fn throughput_mbs(file_size_mb: u32, seconds: f64) -> f64 {
    f64::from(file_size_mb) / seconds
}

/// Format bytes with binary units
///
/// # Examples
/// ```
/// use iobench::util::units::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1048576), "1.0 MiB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

/// Format a phase duration. Sub-second values are shown in milliseconds
/// since most phases on small files finish well under a second.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use iobench::util::units::format_duration;
///
/// assert_eq!(format_duration(Duration::from_micros(2500)), "2.50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.500s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs >= 1.0 {
        format!("{:.3}s", secs)
    } else if duration.as_micros() >= 1 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{}ns", duration.as_nanos())
    }
}

/// Format a MB/s figure
///
/// # Examples
/// ```
/// use iobench::util::units::format_throughput;
///
/// assert_eq!(format_throughput(2048.0), "2.0 GB/s");
/// assert_eq!(format_throughput(95.24), "95.2 MB/s");
/// ```
pub fn format_throughput(mbs: f64) -> String {
    if !mbs.is_finite() {
        format!("{} MB/s", mbs)
    } else if mbs >= 1024.0 {
        format!("{:.1} GB/s", mbs / 1024.0)
    } else {
        format!("{:.1} MB/s", mbs)
    }
}
