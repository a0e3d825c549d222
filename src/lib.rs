//! iobench - sequential file I/O throughput benchmark
//!
//! Copies a pre-generated test file while timing the copy, reads the copy
//! back while timing the read, removes it, and reports both phases as a
//! single JSON record.

use std::path::PathBuf;

use thiserror::Error;

pub mod bench;
pub mod cli;
pub mod config;
pub mod io;
pub mod models;
pub mod util;

/// Errors that abort a benchmark run
#[derive(Debug, Error)]
pub enum IoBenchError {
    /// Wrong argument count, non-integer or non-positive size
    #[error("{0}")]
    Usage(String),
    /// The input file derived from the requested size does not exist
    #[error("test file {} not found", .0.display())]
    InputNotFound(PathBuf),
    /// Opening, reading, writing or removing a file failed
    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    /// Encoding the result record failed
    #[error("JSON encoding failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Configuration file unreadable or values out of range
    #[error("Configuration error: {0}")]
    Config(String),
}

impl IoBenchError {
    /// Wrap an I/O error with a short description of what was being done
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        IoBenchError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for iobench operations
pub type Result<T> = std::result::Result<T, IoBenchError>;

/// Error reporting helpers used by the binary
pub mod error {
    use super::IoBenchError;

    /// Process exit code for a failed run. Every failure is terminal.
    pub fn exit_code(_error: &IoBenchError) -> i32 {
        1
    }

    /// Convert error to a user-facing message with a suggestion where one exists
    pub fn user_friendly_message(error: &IoBenchError) -> String {
        match error {
            IoBenchError::InputNotFound(_) => {
                format!("{}. Generate it first or rerun with --prepare.", error)
            }
            IoBenchError::Io { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                format!("{}. Check permissions on the data directory.", error)
            }
            IoBenchError::Config(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            _ => error.to_string(),
        }
    }
}

pub const APP_NAME: &str = "iobench";
pub const CONFIG_FILE: &str = "iobench.toml";
/// Label written to the `language` field of every result
pub const LANGUAGE: &str = "rust";
/// Infix of the output file name, `test_<N>mb.<tag>.out`
pub const OUTPUT_TAG: &str = "rs";
pub const DEFAULT_DATA_DIR: &str = "../data";
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;
pub const BYTES_PER_MB: u64 = 1024 * 1024;
