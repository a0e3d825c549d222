use std::io::Write;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use iobench::bench::run_benchmark;
use iobench::cli::Cli;
use iobench::config::BenchConfig;
use iobench::io::fixture::ensure_input_file;
use iobench::{error, IoBenchError, Result};
use tracing_subscriber::EnvFilter;

/// Initialize the stderr log subscriber. `RUST_LOG` takes precedence over -v.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("iobench={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return Ok(());
        }
        Err(err) => return Err(IoBenchError::Usage(err.render().to_string())),
    };

    init_tracing(cli.verbose);

    let config = cli.apply(BenchConfig::load(cli.config.as_deref())?);
    config.validate()?;

    if cli.prepare {
        ensure_input_file(&config.layout(), cli.file_size_mb)
            .map_err(|e| IoBenchError::io("preparing input file", e))?;
    }

    let result = run_benchmark(config, cli.file_size_mb)?;
    let line = result.to_json_line()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", line).map_err(|e| IoBenchError::io("writing result", e))?;
    out.flush().map_err(|e| IoBenchError::io("writing result", e))?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        match &err {
            IoBenchError::Usage(msg) => eprintln!("{}", msg.trim_end()),
            _ => eprintln!("Benchmark failed: {}", error::user_friendly_message(&err)),
        }
        process::exit(error::exit_code(&err));
    }
}
