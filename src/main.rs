// src/main.rs
use std::{io, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use file_stats::{app, cli::Args, config::Config, logging, presentation};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    match try_main(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> Result<ExitCode> {
    let config = Config::try_from(args).context("failed to build configuration")?;

    let result = app::run(&config);
    for (_, err) in &result.errors {
        eprintln!("Error: {err}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    presentation::print_results(&result.reports, &config, &mut out).context("failed to write output")?;

    Ok(if result.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
