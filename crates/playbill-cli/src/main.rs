//! Show feed snapshot generator CLI.

use chrono::Local;
use clap::{ColorChoice, Parser};
use playbill_cli::logging::{LogConfig, LogFormat, init_logging};
use playbill_cli::pipeline::{SnapshotJob, run_snapshot};
use playbill_cli::summary::print_summary;
use playbill_model::PipelineOptions;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let job = snapshot_job_from_cli(&cli);
    let exit_code = match run_snapshot(&job) {
        Ok(summary) => {
            print_summary(&summary);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Resolve CLI flags into a fully-specified snapshot job.
fn snapshot_job_from_cli(cli: &Cli) -> SnapshotJob {
    let options = PipelineOptions {
        enforce_visibility: !cli.include_hidden,
        drop_inactive: cli.legacy_strict,
        soon_window_days: if cli.no_soon_flags {
            None
        } else {
            Some(i64::from(cli.window_days))
        },
    };
    SnapshotJob {
        source: cli.source.clone(),
        out_path: cli.out.clone(),
        today: Local::now().date_naive(),
        options,
        dry_run: cli.dry_run,
    }
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
