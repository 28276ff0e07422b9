//! CLI argument definitions for the snapshot generator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "playbill",
    version,
    about = "Generate a stable JSON snapshot from a published stage-show CSV feed",
    long_about = "Fetch a CSV feed of stage-show records, normalize and filter the rows,\n\
                  derive lifecycle status and soon-window flags, and write a\n\
                  deterministic JSON snapshot for the downstream app."
)]
pub struct Cli {
    /// CSV feed source: an http(s) URL or a local file path.
    #[arg(value_name = "SOURCE", env = "SHEET_CSV_URL")]
    pub source: String,

    /// Output file path for the JSON snapshot.
    #[arg(
        long = "out",
        value_name = "PATH",
        env = "OUT_PATH",
        default_value = "shows.json"
    )]
    pub out: PathBuf,

    /// Soon-window length in days for the coming/closing soon flags.
    #[arg(
        long = "window-days",
        value_name = "DAYS",
        env = "SOON_WINDOW_DAYS",
        default_value_t = 60
    )]
    pub window_days: u32,

    /// Disable the coming/closing soon fields entirely.
    #[arg(long = "no-soon-flags")]
    pub no_soon_flags: bool,

    /// Drop records already inactive at the run date (legacy strict mode).
    #[arg(long = "legacy-strict", env = "LEGACY_STRICT")]
    pub legacy_strict: bool,

    /// Keep rows regardless of their visible_on_app flag.
    #[arg(long = "include-hidden")]
    pub include_hidden: bool,

    /// Run the pipeline and print the summary without writing the snapshot.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
