//! Input file generation
//!
//! Builds the `test_<N>mb.txt` files the benchmark expects to find: `N`
//! chunks of one MiB of ASCII `'A'`.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::io::paths::TestFileLayout;
use crate::BYTES_PER_MB;

const FILL_BYTE: u8 = b'A';

/// Write a `size_mb` MiB input file at `path`, replacing any existing file.
/// Parent directories are created as needed.
pub fn create_input_file(path: &Path, size_mb: u32) -> io::Result<u64> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let chunk = vec![FILL_BYTE; BYTES_PER_MB as usize];
    let mut file = File::create(path)?;
    for _ in 0..size_mb {
        file.write_all(&chunk)?;
    }
    file.sync_all()?;

    Ok(u64::from(size_mb) * BYTES_PER_MB)
}

/// Create the input file for `size_mb` if it is missing.
/// Returns `true` when a new file was written.
pub fn ensure_input_file(layout: &TestFileLayout, size_mb: u32) -> io::Result<bool> {
    let path = layout.input_path(size_mb);
    if path.exists() {
        debug!(path = %path.display(), "input file already present");
        return Ok(false);
    }

    info!(path = %path.display(), size_mb, "creating input file");
    create_input_file(&path, size_mb)?;
    Ok(true)
}
