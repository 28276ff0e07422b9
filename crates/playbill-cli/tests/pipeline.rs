//! End-to-end pipeline tests over local CSV fixtures with a pinned run date.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use playbill_cli::pipeline::{SnapshotJob, run_snapshot};
use playbill_model::PipelineOptions;
use serde_json::Value;
use tempfile::TempDir;

const FEED: &str = "\
ID,title,visible_on_app,start_date,close_date
42,Future Show,1,2099-01-01,
7,Hidden Show,0,2020-01-01,
9,First Nine,1,2020-01-01,none
9,Second Nine,1,2020-01-01,none
,No Id,1,2020-01-01,
11,Open Ended,1,2020-01-01,2099-12-31
12,Weird Start,1,oops,
13,Closed Show,1,2019-01-01,2020-06-01
,,,,
";

fn pinned_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
}

fn write_feed(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("feed.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn job(dir: &TempDir, feed: &PathBuf, options: PipelineOptions) -> SnapshotJob {
    SnapshotJob {
        source: feed.to_str().unwrap().to_string(),
        out_path: dir.path().join("shows.json"),
        today: pinned_today(),
        options,
        dry_run: false,
    }
}

fn run_fixture(options: PipelineOptions) -> (TempDir, Vec<u8>, playbill_cli::pipeline::RunSummary) {
    let dir = TempDir::new().unwrap();
    let feed = write_feed(&dir, FEED);
    let job = job(&dir, &feed, options);
    let summary = run_snapshot(&job).unwrap();
    let bytes = fs::read(&job.out_path).unwrap();
    (dir, bytes, summary)
}

fn parse(bytes: &[u8]) -> Vec<Value> {
    serde_json::from_slice::<Vec<Value>>(bytes).unwrap()
}

#[test]
fn survivors_keep_source_order_and_counts_add_up() {
    let (_dir, bytes, summary) = run_fixture(PipelineOptions::default());
    let shows = parse(&bytes);

    let ids: Vec<i64> = shows.iter().map(|s| s["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![42, 9, 11, 12, 13]);

    assert_eq!(summary.rows_read, 9);
    assert_eq!(summary.blank_rows, 1);
    assert_eq!(summary.hidden_rows, 1);
    assert_eq!(summary.missing_id_rows, 1);
    assert_eq!(summary.duplicate_id_rows, 1);
    assert_eq!(summary.inactive_dropped, 0);
    assert_eq!(summary.written, 5);
}

#[test]
fn far_future_show_is_future_but_not_coming_soon() {
    let (_dir, bytes, _) = run_fixture(PipelineOptions::default());
    let shows = parse(&bytes);
    let show = shows.iter().find(|s| s["id"] == 42).unwrap();
    assert_eq!(show["status"], "future");
    assert_eq!(show["coming_soon"], false);
    assert_eq!(show["start_date"], "2099-01-01");
}

#[test]
fn hidden_rows_never_reach_the_snapshot() {
    let (_dir, bytes, _) = run_fixture(PipelineOptions::default());
    assert!(parse(&bytes).iter().all(|s| s["id"] != 7));
}

#[test]
fn first_duplicate_wins() {
    let (_dir, bytes, _) = run_fixture(PipelineOptions::default());
    let shows = parse(&bytes);
    let nines: Vec<&Value> = shows.iter().filter(|s| s["id"] == 9).collect();
    assert_eq!(nines.len(), 1);
    assert_eq!(nines[0]["title"], "First Nine");
}

#[test]
fn sentinel_close_date_stays_open_ended_and_textual() {
    let (_dir, bytes, _) = run_fixture(PipelineOptions::default());
    let shows = parse(&bytes);
    let show = shows.iter().find(|s| s["id"] == 11).unwrap();
    assert_eq!(show["status"], "active");
    assert_eq!(show["close_date"], "2099-12-31");
}

#[test]
fn unparseable_start_date_is_no_date_not_an_error() {
    let (_dir, bytes, _) = run_fixture(PipelineOptions::default());
    let shows = parse(&bytes);
    let show = shows.iter().find(|s| s["id"] == 12).unwrap();
    assert_eq!(show["status"], "active");
    assert_eq!(show["start_date"], "oops");
    assert_eq!(show["close_date"], "");
}

#[test]
fn legacy_strict_mode_drops_inactive_records() {
    let options = PipelineOptions {
        drop_inactive: true,
        ..PipelineOptions::default()
    };
    let (_dir, bytes, summary) = run_fixture(options);
    let shows = parse(&bytes);
    assert!(shows.iter().all(|s| s["id"] != 13));
    assert!(shows.iter().all(|s| s["status"] != "inactive"));
    assert_eq!(summary.inactive_dropped, 1);
    assert_eq!(summary.written, 4);
}

#[test]
fn disabled_soon_window_omits_soon_fields() {
    let options = PipelineOptions {
        soon_window_days: None,
        ..PipelineOptions::default()
    };
    let (_dir, bytes, _) = run_fixture(options);
    for show in parse(&bytes) {
        let object = show.as_object().unwrap();
        assert!(!object.contains_key("coming_soon"));
        assert!(!object.contains_key("closing_soon"));
        assert!(!object.contains_key("days_until_start"));
        assert!(!object.contains_key("days_until_close"));
    }
}

#[test]
fn snapshot_is_byte_identical_across_runs() {
    let (_dir_a, first, _) = run_fixture(PipelineOptions::default());
    let (_dir_b, second, _) = run_fixture(PipelineOptions::default());
    assert_eq!(first, second);
}

#[test]
fn snapshot_has_stable_shape() {
    let (_dir, bytes, _) = run_fixture(PipelineOptions::default());
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("[\n"));
    assert!(text.ends_with("]\n"));
    assert!(text.contains("  {\n"));
    // Keys sorted: close_date before coming_soon before id
    let close = text.find("\"close_date\"").unwrap();
    let coming = text.find("\"coming_soon\"").unwrap();
    let id = text.find("\"id\"").unwrap();
    assert!(close < coming && coming < id);
}

#[test]
fn header_only_feed_writes_an_empty_snapshot() {
    let dir = TempDir::new().unwrap();
    let feed = write_feed(&dir, "ID,title,visible_on_app,start_date,close_date\n");
    let job = job(&dir, &feed, PipelineOptions::default());
    let summary = run_snapshot(&job).unwrap();
    assert_eq!(summary.written, 0);
    assert_eq!(fs::read(&job.out_path).unwrap(), b"[]\n");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let feed = write_feed(&dir, FEED);
    let mut job = job(&dir, &feed, PipelineOptions::default());
    job.dry_run = true;
    let summary = run_snapshot(&job).unwrap();
    assert_eq!(summary.written, 5);
    assert!(!job.out_path.exists());
}

#[test]
fn missing_source_aborts_without_touching_prior_output() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("shows.json");
    fs::write(&out_path, b"[]\n").unwrap();
    let job = SnapshotJob {
        source: dir.path().join("missing.csv").to_str().unwrap().to_string(),
        out_path: out_path.clone(),
        today: pinned_today(),
        options: PipelineOptions::default(),
        dry_run: false,
    };
    assert!(run_snapshot(&job).is_err());
    assert_eq!(fs::read(&out_path).unwrap(), b"[]\n");
}
