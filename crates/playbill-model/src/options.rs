//! Pipeline configuration and per-run context.

use chrono::NaiveDate;

/// Default soon-window length in days.
pub const DEFAULT_SOON_WINDOW_DAYS: i64 = 60;

/// Capability toggles for one pipeline run.
///
/// The three feed revisions in production differed only in which of these
/// were enabled, so they are a single options struct rather than parallel
/// pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Drop rows whose `visible_on_app` is not exactly `1`/`"1"`.
    pub enforce_visibility: bool,
    /// Legacy strict mode: drop records already `inactive` at the run date.
    pub drop_inactive: bool,
    /// Soon-window length in days; `None` disables the soon fields entirely.
    pub soon_window_days: Option<i64>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            enforce_visibility: true,
            drop_inactive: false,
            soon_window_days: Some(DEFAULT_SOON_WINDOW_DAYS),
        }
    }
}

/// Immutable context for one pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct RunContext {
    /// The "today" reference point for lifecycle derivation.
    pub today: NaiveDate,
    pub options: PipelineOptions,
}

impl RunContext {
    pub fn new(today: NaiveDate, options: PipelineOptions) -> Self {
        Self { today, options }
    }
}
