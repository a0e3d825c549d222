//! Configuration management module
//!
//! Handles loading and validation of benchmark settings. Values come from
//! built-in defaults, then an optional TOML file, then command line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::io::paths::TestFileLayout;
use crate::{
    IoBenchError, Result, APP_NAME, CONFIG_FILE, DEFAULT_BUFFER_SIZE, DEFAULT_DATA_DIR, LANGUAGE,
    OUTPUT_TAG,
};

const MAX_BUFFER_SIZE: usize = 64 * 1024 * 1024;

/// Settings for a benchmark run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Directory holding the input and output test files
    pub data_dir: PathBuf,
    /// Chunk size for both the copy and the read loop (in bytes)
    pub buffer_size: usize,
    /// Value written to the `language` field of the result
    pub language: String,
    /// Infix of the output file name
    pub output_tag: String,
    /// Leave the output file in place after the run
    pub keep_output: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            buffer_size: DEFAULT_BUFFER_SIZE,
            language: LANGUAGE.to_string(),
            output_tag: OUTPUT_TAG.to_string(),
            keep_output: false,
        }
    }
}

impl BenchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(IoBenchError::Config(
                "Buffer size must be greater than 0".to_string(),
            ));
        }

        if self.buffer_size > MAX_BUFFER_SIZE {
            return Err(IoBenchError::Config(format!(
                "Buffer size too large: {} bytes (max: {} bytes)",
                self.buffer_size, MAX_BUFFER_SIZE
            )));
        }

        if self.language.trim().is_empty() {
            return Err(IoBenchError::Config(
                "Language label must not be empty".to_string(),
            ));
        }

        if self.output_tag.is_empty() {
            return Err(IoBenchError::Config(
                "Output tag must not be empty".to_string(),
            ));
        }

        if self.output_tag.contains(['/', '\\']) {
            return Err(IoBenchError::Config(format!(
                "Output tag must not contain path separators: {}",
                self.output_tag
            )));
        }

        Ok(())
    }

    /// Naming layout for the test files under `data_dir`
    pub fn layout(&self) -> TestFileLayout {
        TestFileLayout::new(&self.data_dir, &self.output_tag)
    }

    pub fn with_data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_dir = path.into();
        self
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_output_tag(mut self, tag: impl Into<String>) -> Self {
        self.output_tag = tag.into();
        self
    }

    pub fn with_keep_output(mut self, keep: bool) -> Self {
        self.keep_output = keep;
        self
    }

    /// Parse and validate a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            IoBenchError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            IoBenchError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `explicit` if given, otherwise from the standard location.
    /// An explicit file must exist; a missing standard file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config file");
            return Self::from_file(path);
        }

        match Self::config_file_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "loading config file");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Standard configuration file path, `$CONFIG_HOME/iobench/iobench.toml`
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
