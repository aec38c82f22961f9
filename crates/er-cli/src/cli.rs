//! CLI argument definitions for the encounter analytics tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "er-insights",
    version,
    about = "Emergency-department encounter analytics",
    long_about = "Run the fixed aggregate analysis over a CSV of patient encounters.\n\n\
                  Prints summary tables, renders chart images, and writes a\n\
                  narrative markdown report plus a JSON metrics dump."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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

#[derive(Subcommand)]
pub enum Command {
    /// Run the full analysis over an encounter CSV.
    Report(ReportArgs),

    /// List the supported metric computations.
    Metrics,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the encounter CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,

    /// Output directory for generated files (default: <input dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip chart rendering.
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Skip the markdown report.
    #[arg(long = "no-markdown")]
    pub no_markdown: bool,

    /// Skip the JSON metrics dump.
    #[arg(long = "no-json")]
    pub no_json: bool,

    /// Compute and print without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
