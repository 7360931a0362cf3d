//! CLI argument definitions for the accident EDA.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use eda_ingest::DEFAULT_DATASET_PATH;
use eda_report::ChartKind;

#[derive(Parser)]
#[command(
    name = "accident-eda",
    version,
    about = "Exploratory analysis of the Nashville traffic accident dataset",
    long_about = "Load the Nashville traffic accident dataset, clean it with a fixed\n\
                  missing-value policy and print descriptive charts.\n\n\
                  Charts are rendered as terminal tables; nothing is written to disk."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

#[derive(Subcommand)]
pub enum Command {
    /// Profile the raw dataset (shape, column types, nulls, describe, head).
    Profile(InputArgs),

    /// Run the cleaning pipeline and print what it changed.
    Clean(CleanArgs),

    /// Run the cleaning pipeline and render the descriptive charts.
    Charts(ChartsArgs),
}

#[derive(Parser)]
pub struct InputArgs {
    /// Path to the accident CSV file.
    #[arg(long = "input", value_name = "PATH", default_value = DEFAULT_DATASET_PATH)]
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the cleaning report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ChartsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Render a single chart instead of the full sequence.
    #[arg(long = "chart", value_enum)]
    pub chart: Option<ChartArg>,

    /// Number of categories in the top-N weather and collision charts.
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,
}

/// CLI chart choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartArg {
    Weekday,
    Hour,
    Weather,
    Collision,
    Season,
    HourByWeather,
}

impl From<ChartArg> for ChartKind {
    fn from(value: ChartArg) -> Self {
        match value {
            ChartArg::Weekday => ChartKind::WeekdayCounts,
            ChartArg::Hour => ChartKind::HourHistogram,
            ChartArg::Weather => ChartKind::TopWeather,
            ChartArg::Collision => ChartKind::TopCollisionTypes,
            ChartArg::Season => ChartKind::SeasonCounts,
            ChartArg::HourByWeather => ChartKind::HourByWeather,
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

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_charts_defaults_to_dataset_path() {
        let cli = Cli::try_parse_from(["accident-eda", "charts", "--chart", "hour-by-weather"])
            .unwrap();
        let Command::Charts(args) = cli.command else {
            panic!("expected charts");
        };
        assert_eq!(args.input.input, PathBuf::from(DEFAULT_DATASET_PATH));
        assert_eq!(args.chart, Some(ChartArg::HourByWeather));
        assert_eq!(args.top, None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "accident-eda",
            "clean",
            "--json",
            "--log-format",
            "json",
            "--input",
            "accidents.csv",
        ])
        .unwrap();
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        let Command::Clean(args) = cli.command else {
            panic!("expected clean");
        };
        assert!(args.json);
        assert_eq!(args.input.input, PathBuf::from("accidents.csv"));
    }
}
