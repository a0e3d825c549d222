//! Test file naming convention
//!
//! Maps a requested size and a file role onto a path under the data
//! directory. Nothing here touches the filesystem.

use std::path::{Path, PathBuf};

use crate::{DEFAULT_DATA_DIR, OUTPUT_TAG};

/// Which side of the copy a path belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// Pre-existing source file, `test_<N>mb.txt`
    Input,
    /// Scratch copy, `test_<N>mb.<tag>.out`, removed after the run
    Output,
}

/// Location and naming of the benchmark's test files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFileLayout {
    data_dir: PathBuf,
    output_tag: String,
}

impl Default for TestFileLayout {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR, OUTPUT_TAG)
    }
}

impl TestFileLayout {
    pub fn new(data_dir: impl Into<PathBuf>, output_tag: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_tag: output_tag.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file playing `role` for a run of `file_size_mb`
    pub fn path_for(&self, file_size_mb: u32, role: FileRole) -> PathBuf {
        let name = match role {
            FileRole::Input => format!("test_{}mb.txt", file_size_mb),
            FileRole::Output => format!("test_{}mb.{}.out", file_size_mb, self.output_tag),
        };
        self.data_dir.join(name)
    }

    pub fn input_path(&self, file_size_mb: u32) -> PathBuf {
        self.path_for(file_size_mb, FileRole::Input)
    }

    pub fn output_path(&self, file_size_mb: u32) -> PathBuf {
        self.path_for(file_size_mb, FileRole::Output)
    }
}
