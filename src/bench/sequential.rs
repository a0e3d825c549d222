//! Sequential copy and read benchmark
//!
//! Copies the input file to a scratch output file with a fixed-size buffer,
//! timing the whole copy as the write phase, then reads the output back with
//! the same buffer as the read phase. The output file is removed afterwards.

use std::fs::File;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::io::disk::{copy_stream, drain_stream, OutputFile};
use crate::io::paths::TestFileLayout;
use crate::models::{BenchmarkResult, PhaseReport};
use crate::{IoBenchError, Result};

/// Sequential benchmark executor
#[derive(Debug)]
pub struct SequentialBenchmark {
    config: BenchConfig,
    layout: TestFileLayout,
}

impl SequentialBenchmark {
    /// Create a new executor, rejecting invalid configuration up front
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        let layout = config.layout();
        Ok(Self { config, layout })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn layout(&self) -> &TestFileLayout {
        &self.layout
    }

    /// Run both phases for the `test_<file_size_mb>mb.txt` input file
    pub fn run(&self, file_size_mb: u32) -> Result<BenchmarkResult> {
        if file_size_mb == 0 {
            return Err(IoBenchError::Usage(
                "file size must be a positive integer".to_string(),
            ));
        }

        let input_path = self.layout.input_path(file_size_mb);
        let output_path = self.layout.output_path(file_size_mb);

        if !input_path.exists() {
            return Err(IoBenchError::InputNotFound(input_path));
        }

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            buffer_size = self.config.buffer_size,
            "starting benchmark"
        );

        let mut buffer = vec![0u8; self.config.buffer_size];

        let mut source = File::open(&input_path).map_err(|e| {
            IoBenchError::io(format!("opening {}", input_path.display()), e)
        })?;
        let (mut output, sink) = OutputFile::create(&output_path).map_err(|e| {
            IoBenchError::io(format!("creating {}", output_path.display()), e)
        })?;
        if self.config.keep_output {
            output.keep_on_drop();
        }

        let write_phase = self.copy_phase(&mut source, sink, &mut buffer)?;
        drop(source);
        debug!(phase = "write", "{}", write_phase.describe());

        let read_phase = self.read_phase(&output, &mut buffer)?;
        debug!(phase = "read", "{}", read_phase.describe());

        if write_phase.bytes != read_phase.bytes {
            warn!(
                written = write_phase.bytes,
                read = read_phase.bytes,
                "read back a different number of bytes than were copied"
            );
        }

        self.cleanup(output);

        let result = BenchmarkResult::from_phases(
            self.config.language.clone(),
            file_size_mb,
            read_phase.elapsed,
            write_phase.elapsed,
        );
        info!("{}", result.summary());
        Ok(result)
    }

    /// Copy the whole input into `sink`. The timer covers every read of the
    /// source and every write of the output.
    fn copy_phase(
        &self,
        source: &mut File,
        mut sink: File,
        buffer: &mut [u8],
    ) -> Result<PhaseReport> {
        let start = Instant::now();
        let bytes = copy_stream(source, &mut sink, buffer)
            .map_err(|e| IoBenchError::io("copying input to output", e))?;
        let elapsed = start.elapsed();
        drop(sink);

        Ok(PhaseReport::new(bytes, elapsed))
    }

    /// Read the output back to end of file, discarding it
    fn read_phase(&self, output: &OutputFile, buffer: &mut [u8]) -> Result<PhaseReport> {
        let mut file = output.open_read().map_err(|e| {
            IoBenchError::io(format!("reopening {}", output.path().display()), e)
        })?;

        let start = Instant::now();
        let bytes = drain_stream(&mut file, buffer)
            .map_err(|e| IoBenchError::io("reading output back", e))?;
        let elapsed = start.elapsed();

        Ok(PhaseReport::new(bytes, elapsed))
    }

    /// Remove the output file. Failure is reported but never fails the run.
    fn cleanup(&self, output: OutputFile) {
        let path = output.path().to_path_buf();
        if self.config.keep_output {
            debug!(path = %path.display(), "keeping output file");
        }
        if let Err(e) = output.remove() {
            warn!(path = %path.display(), error = %e, "failed to remove output file");
        }
    }
}
