//! The snapshot run, stage by stage.
//!
//! 1. **Ingest**: fetch the feed bytes, lossy-decode, parse CSV rows
//! 2. **Transform**: assemble, filter, and annotate records
//! 3. **Write**: serialize the deterministic JSON snapshot
//!
//! A single pass, no retries: a failed fetch aborts the run and leaves any
//! prior snapshot untouched. Re-running on schedule is the retry strategy.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info, info_span, warn};

use playbill_ingest::{decode_feed, fetch_feed, parse_feed};
use playbill_model::{PipelineOptions, Record, RunContext};
use playbill_output::write_snapshot;
use playbill_transform::{FilterDecision, accept, annotate, assemble, drops_in_strict_mode};

/// Everything one snapshot run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct SnapshotJob {
    /// Feed source: an http(s) URL or a local file path.
    pub source: String,
    /// Snapshot output path.
    pub out_path: PathBuf,
    /// The "today" reference point for lifecycle derivation.
    pub today: NaiveDate,
    pub options: PipelineOptions,
    /// Run the pipeline without writing the snapshot.
    pub dry_run: bool,
}

/// Per-stage counts for the run summary.
#[derive(Debug, Default, Clone)]
pub struct RunSummary {
    pub rows_read: usize,
    pub blank_rows: usize,
    pub hidden_rows: usize,
    pub missing_id_rows: usize,
    pub duplicate_id_rows: usize,
    pub inactive_dropped: usize,
    pub written: usize,
    pub out_path: PathBuf,
    pub dry_run: bool,
}

/// Run the full pipeline for one snapshot.
pub fn run_snapshot(job: &SnapshotJob) -> Result<RunSummary> {
    let run_span = info_span!("snapshot", source = %job.source);
    let _run_guard = run_span.enter();

    let rows = ingest(job)?;
    let (records, mut summary) = transform(job, &rows);

    summary.out_path = job.out_path.clone();
    summary.dry_run = job.dry_run;
    summary.written = records.len();

    if job.dry_run {
        info!(record_count = records.len(), "write skipped (dry run)");
        return Ok(summary);
    }

    let write_start = Instant::now();
    write_snapshot(&job.out_path, &records)
        .with_context(|| format!("write snapshot {}", job.out_path.display()))?;
    info!(
        record_count = records.len(),
        path = %job.out_path.display(),
        duration_ms = write_start.elapsed().as_millis(),
        "snapshot written"
    );

    Ok(summary)
}

fn ingest(job: &SnapshotJob) -> Result<Vec<playbill_model::RawRow>> {
    let ingest_span = info_span!("ingest");
    let _ingest_guard = ingest_span.enter();
    let start = Instant::now();

    let bytes = fetch_feed(&job.source).context("fetch feed")?;
    let text = decode_feed(&bytes);
    let rows = parse_feed(&text).context("parse feed")?;
    debug!(
        byte_count = bytes.len(),
        row_count = rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(rows)
}

fn transform(job: &SnapshotJob, rows: &[playbill_model::RawRow]) -> (Vec<Record>, RunSummary) {
    let transform_span = info_span!("transform");
    let _transform_guard = transform_span.enter();
    let start = Instant::now();

    let ctx = RunContext::new(job.today, job.options);
    let mut summary = RunSummary {
        rows_read: rows.len(),
        ..RunSummary::default()
    };
    let mut seen_ids: BTreeSet<String> = BTreeSet::new();
    let mut records = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        // 1-based data row number, counting the header line
        let row_number = index + 2;
        let Some(mut record) = assemble(row) else {
            summary.blank_rows += 1;
            continue;
        };
        match accept(&record, &job.options, &mut seen_ids) {
            FilterDecision::Keep => {}
            FilterDecision::DropSilently => {
                summary.hidden_rows += 1;
                continue;
            }
            FilterDecision::DropWithWarning(reason) => {
                warn!(row = row_number, "{reason}; skipping row");
                if record.id_text().is_none() {
                    summary.missing_id_rows += 1;
                } else {
                    summary.duplicate_id_rows += 1;
                }
                continue;
            }
        }
        annotate(&mut record, &ctx);
        if job.options.drop_inactive && drops_in_strict_mode(&record) {
            summary.inactive_dropped += 1;
            continue;
        }
        records.push(record);
    }

    debug!(
        rows_read = summary.rows_read,
        blank_rows = summary.blank_rows,
        hidden_rows = summary.hidden_rows,
        missing_id_rows = summary.missing_id_rows,
        duplicate_id_rows = summary.duplicate_id_rows,
        inactive_dropped = summary.inactive_dropped,
        surviving = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );
    (records, summary)
}
