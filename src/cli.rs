//! CLI argument parsing for iobench

use std::path::PathBuf;

use clap::Parser;

use crate::config::BenchConfig;

#[derive(Parser, Debug)]
#[command(name = "iobench")]
#[command(version)]
#[command(about = "Time a buffered copy and read-back of a test file", long_about = None)]
pub struct Cli {
    /// Size of the test file in megabytes; selects test_<N>mb.txt
    #[arg(value_name = "FILE_SIZE_MB", value_parser = clap::value_parser!(u32).range(1..))]
    pub file_size_mb: u32,

    /// Read settings from this TOML file instead of the default location
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the test files
    #[arg(short = 'd', long = "data-dir", value_name = "DIR", env = "IOBENCH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Chunk size for the copy and read loops, in bytes
    #[arg(short = 'b', long = "buffer-size", value_name = "BYTES")]
    pub buffer_size: Option<usize>,

    /// Leave the output file in place after the run
    #[arg(long = "keep-output")]
    pub keep_output: bool,

    /// Create the input file first if it does not exist
    #[arg(long = "prepare")]
    pub prepare: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply command line overrides on top of a loaded configuration
    pub fn apply(&self, mut config: BenchConfig) -> BenchConfig {
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir.clone());
        }
        if let Some(size) = self.buffer_size {
            config = config.with_buffer_size(size);
        }
        if self.keep_output {
            config = config.with_keep_output(true);
        }
        config
    }
}
