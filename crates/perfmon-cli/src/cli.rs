//! CLI argument definitions for the perfmon reshaper.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

/// Default counter-selection criteria: physical-disk throughput counters.
/// Override with `--require-all` / `--require-any`.
pub const DEFAULT_REQUIRE_ALL: &[&str] = &["physical"];
pub const DEFAULT_REQUIRE_ANY: &[&str] = &[
    "Disk Reads/sec",
    "Disk Writes/sec",
    "Disk Read Bytes/sec",
    "Disk Write Bytes/sec",
];

#[derive(Parser)]
#[command(
    name = "perfmon-reshape",
    version,
    about = "Reshape a perfmon CSV export from wide to long (tidy) form",
    long_about = "Reshape a Windows Performance Monitor CSV export from wide form\n\
                  (one column per counter) to long form (one row per\n\
                  timestamp/counter/value), deriving the disk volume and leaf\n\
                  metric name from each composite counter path."
)]
pub struct Cli {
    /// The perfmon CSV file to parse.
    #[arg(value_name = "INPUT_CSV")]
    pub input_csv: PathBuf,

    /// The output CSV filename. Overwritten if it exists.
    #[arg(value_name = "OUTPUT_CSV")]
    pub output_csv: PathBuf,

    /// Read values starting with this timestamp, e.g. --from='2019-01-14 13:20:00'.
    /// Ignored unless --to is also given.
    #[arg(short = 'f', long = "from", value_name = "TIMESTAMP")]
    pub from: Option<String>,

    /// Read values until this timestamp. Ignored unless --from is also given.
    #[arg(short = 't', long = "to", value_name = "TIMESTAMP")]
    pub to: Option<String>,

    /// Format for parsing --from/--to. Does NOT apply to the data file's own
    /// timestamp column, which always uses the fixed perfmon format.
    #[arg(
        long = "dateformat",
        alias = "df",
        value_name = "FORMAT",
        default_value = "%Y-%m-%d %H:%M:%S"
    )]
    pub dateformat: String,

    /// Pattern every kept counter name must match (repeatable, case-insensitive
    /// regex search).
    #[arg(long = "require-all", value_name = "PATTERN")]
    pub require_all: Vec<String>,

    /// Pattern at least one of which every kept counter name must match
    /// (repeatable, case-insensitive regex search).
    #[arg(long = "require-any", value_name = "PATTERN")]
    pub require_any: Vec<String>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

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
    /// Effective must-match-all patterns, falling back to the built-in
    /// defaults when none were supplied.
    pub fn effective_require_all(&self) -> Vec<String> {
        if self.require_all.is_empty() {
            DEFAULT_REQUIRE_ALL.iter().map(|s| (*s).to_string()).collect()
        } else {
            self.require_all.clone()
        }
    }

    /// Effective must-match-any patterns, falling back to the built-in
    /// defaults when none were supplied.
    pub fn effective_require_any(&self) -> Vec<String> {
        if self.require_any.is_empty() {
            DEFAULT_REQUIRE_ANY.iter().map(|s| (*s).to_string()).collect()
        } else {
            self.require_any.clone()
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
