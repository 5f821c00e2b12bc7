//! CLI argument definitions for the Olympic Games analyzer.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use olympics_cli::logging::{LogConfig, LogFormat};
use olympics_cli::report::OutputFormat;
use olympics_model::{CountryFilter, SeasonFilter, SportFilter, YearFilter};

#[derive(Parser)]
#[command(
    name = "olympics",
    version,
    about = "Olympic Games analytics - medal tallies, participation trends and athlete statistics",
    long_about = "Analyze 120 years of Olympic Games results.\n\n\
                  Reads the athlete events dataset and the NOC region mapping,\n\
                  then prints medal tallies, country and athlete views."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub data: DataArgs,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging configuration; `--log-level` wins over `-v`/`-q`, and either
    /// disables the `RUST_LOG` override.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let mut config = LogConfig::default()
            .with_level_filter(level_filter)
            .with_format(self.log_format.into())
            .with_log_file(self.log_file.clone());
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}

/// Input files and preprocessing options shared by every subcommand.
#[derive(Args)]
pub struct DataArgs {
    /// Athlete events CSV.
    #[arg(
        long = "events",
        value_name = "PATH",
        env = "OLYMPICS_EVENTS",
        default_value = "athlete_events.csv",
        global = true
    )]
    pub events: PathBuf,

    /// NOC to region mapping CSV.
    #[arg(
        long = "regions",
        value_name = "PATH",
        env = "OLYMPICS_REGIONS",
        default_value = "noc_regions.csv",
        global = true
    )]
    pub regions: PathBuf,

    /// Restrict the analysis to one season.
    #[arg(long = "season", value_enum, default_value = "all", global = true)]
    pub season: SeasonArg,

    /// Result format.
    #[arg(long = "output", value_enum, default_value = "table", global = true)]
    pub output: OutputArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Medal tally for a year and country ("Overall" for all).
    Tally(TallyArgs),

    /// Headline statistics, participation over time and top athletes.
    Overview(SportArgs),

    /// Medals over time, sport heatmap and top athletes of one country.
    Country(CountryArgs),

    /// Age, physique and gender distributions.
    Athletes(SportArgs),

    /// List the available years, countries and sports.
    Selectors,
}

#[derive(Args)]
pub struct TallyArgs {
    /// Year to tally, or "Overall".
    #[arg(long = "year", default_value = "Overall")]
    pub year: YearFilter,

    /// Country (region) to tally, or "Overall".
    #[arg(long = "country", default_value = "Overall")]
    pub country: CountryFilter,
}

#[derive(Args)]
pub struct SportArgs {
    /// Restrict athlete views to one sport, or "Overall".
    #[arg(long = "sport", default_value = "Overall")]
    pub sport: SportFilter,
}

#[derive(Args)]
pub struct CountryArgs {
    /// Region name as listed by `selectors`.
    #[arg(value_name = "COUNTRY")]
    pub country: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SeasonArg {
    All,
    Summer,
    Winter,
}

impl From<SeasonArg> for SeasonFilter {
    fn from(value: SeasonArg) -> Self {
        match value {
            SeasonArg::All => SeasonFilter::All,
            SeasonArg::Summer => SeasonFilter::Summer,
            SeasonArg::Winter => SeasonFilter::Winter,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
    Csv,
}

impl From<OutputArg> for OutputFormat {
    fn from(value: OutputArg) -> Self {
        match value {
            OutputArg::Table => OutputFormat::Table,
            OutputArg::Json => OutputFormat::Json,
            OutputArg::Csv => OutputFormat::Csv,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(value: LogLevelArg) -> Self {
        match value {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn tally_defaults_to_overall() {
        let cli = Cli::try_parse_from(["olympics", "tally"]).unwrap();
        let Command::Tally(args) = cli.command else {
            panic!("expected tally");
        };
        assert_eq!(args.year, YearFilter::Overall);
        assert_eq!(args.country, CountryFilter::Overall);
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "olympics",
            "tally",
            "--year",
            "2016",
            "--country",
            "India",
            "--season",
            "summer",
            "--output",
            "json",
            "--events",
            "data/events.csv",
        ])
        .unwrap();
        assert!(matches!(cli.data.season, SeasonArg::Summer));
        assert!(matches!(cli.data.output, OutputArg::Json));
        assert_eq!(cli.data.events, PathBuf::from("data/events.csv"));
        let Command::Tally(args) = cli.command else {
            panic!("expected tally");
        };
        assert_eq!(args.year, YearFilter::Year(2016));
        assert_eq!(args.country, CountryFilter::country("India"));
    }

    #[test]
    fn explicit_log_level_disables_env_override() {
        let cli = Cli::try_parse_from([
            "olympics",
            "selectors",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.use_env_filter);

        let quiet = Cli::try_parse_from(["olympics", "selectors"]).unwrap();
        assert!(quiet.log_config().use_env_filter);
    }

    #[test]
    fn invalid_year_is_rejected() {
        assert!(Cli::try_parse_from(["olympics", "tally", "--year", "last"]).is_err());
    }
}
