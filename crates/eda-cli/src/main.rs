//! Nashville accident EDA CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use eda_cli::commands::{run_charts, run_clean, run_profile};
use eda_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::summary::{print_charts, print_profile, print_report, print_report_json};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Profile(args) => match run_profile(&args.input) {
            Ok(profile) => {
                print_profile(&profile);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Clean(args) => match run_clean(&args.input.input) {
            Ok(cleaned) if args.json => match print_report_json(&cleaned.report) {
                Ok(()) => 0,
                Err(error) => report_error(&error.into()),
            },
            Ok(cleaned) => {
                print_report(&cleaned.report);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Charts(args) => {
            match run_charts(&args.input.input, args.chart.map(Into::into), args.top) {
                Ok(charts) => {
                    print_charts(&charts);
                    0
                }
                Err(error) => report_error(&error),
            }
        }
    };
    std::process::exit(exit_code);
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
