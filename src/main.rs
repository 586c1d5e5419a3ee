//! snip-tsv: crop or plot delimited time-series data.

mod cli;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use snip_tsv::{Outcome, RunConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // A closed stdout (e.g. piping into `head`) is not a failure.
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = RunConfig::from(cli);
    let outcome = snip_tsv::run(&config)
        .with_context(|| format!("failed to process {}", config.input))?;

    match outcome {
        Outcome::RowsWritten(n) => log::info!("done, {n} rows"),
        Outcome::Plotted(n) => log::info!("done, {n} points plotted"),
    }
    Ok(())
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io| io.kind() == io::ErrorKind::BrokenPipe)
    })
}
