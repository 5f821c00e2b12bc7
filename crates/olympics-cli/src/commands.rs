use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info_span;

use olympics_cli::analysis::Analysis;
use olympics_cli::report::{OutputFormat, Report};
use olympics_model::PreprocessOptions;

use crate::cli::{Command, DataArgs};

/// Loads the data, builds the report for `command` and writes it to stdout.
pub fn run(command: &Command, data: &DataArgs) -> Result<()> {
    let options = PreprocessOptions::new().with_season(data.season.into());
    let analysis = Analysis::load(&data.events, &data.regions, &options)?;

    let report = build_report(&analysis, command)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report
        .write(OutputFormat::from(data.output), &mut out)
        .context("write report")?;
    out.flush().context("flush stdout")?;
    Ok(())
}

fn build_report(analysis: &Analysis, command: &Command) -> Result<Report> {
    match command {
        Command::Tally(args) => {
            let _guard = info_span!("tally", year = %args.year, country = %args.country).entered();
            analysis.tally(args.year, &args.country)
        }
        Command::Overview(args) => {
            let _guard = info_span!("overview", sport = %args.sport).entered();
            analysis.overview(&args.sport)
        }
        Command::Country(args) => {
            let _guard = info_span!("country", country = %args.country).entered();
            analysis.country(&args.country)
        }
        Command::Athletes(args) => {
            let _guard = info_span!("athletes", sport = %args.sport).entered();
            analysis.athletes(&args.sport)
        }
        Command::Selectors => analysis.selectors(),
    }
}
