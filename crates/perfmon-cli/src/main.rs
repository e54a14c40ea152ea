//! Perfmon CSV reshaper CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::Level;

use perfmon_cli::cli::{Cli, LogFormatArg};
use perfmon_cli::logging::{LogConfig, LogFormat, init_logging};
use perfmon_cli::pipeline::{RunConfig, run};
use perfmon_cli::summary::print_summary;
use perfmon_model::PerfmonError;

const USAGE_EXAMPLE: &str = "EXAMPLE:\n\t$ perfmon-reshape DataCollector.csv DataCollector_long.csv \
                             -f \"2019-01-14 00:00:00\" -t \"2019-01-14 01:00:00\"";

fn main() {
    // Argument errors print usage plus a worked example and exit 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            if matches!(
                error.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                error.exit();
            }
            let _ = error.print();
            eprintln!("{USAGE_EXAMPLE}");
            std::process::exit(1);
        }
    };
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let config = RunConfig {
        input_csv: cli.input_csv.clone(),
        output_csv: cli.output_csv.clone(),
        from: cli.from.clone(),
        to: cli.to.clone(),
        dateformat: cli.dateformat.clone(),
        require_all: cli.effective_require_all(),
        require_any: cli.effective_require_any(),
    };

    let exit_code = match run(&config) {
        Ok(report) => {
            print_summary(&report);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            match error.downcast_ref::<PerfmonError>() {
                Some(PerfmonError::InputNotFound(_)) => 2,
                _ => 1,
            }
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level: cli
            .verbosity
            .tracing_level_filter()
            .into_level()
            .unwrap_or(Level::ERROR),
        ..LogConfig::default()
    };
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
