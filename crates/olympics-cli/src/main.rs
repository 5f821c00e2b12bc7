//! Olympic Games analytics CLI.

use std::process::ExitCode;

use clap::Parser;
use olympics_cli::logging::init_logging;

mod cli;
mod commands;

use crate::cli::Cli;
use crate::commands::run;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    match run(&cli.command, &cli.data) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
