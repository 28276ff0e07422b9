//! Date-derived lifecycle status and soon-window flags.

use chrono::NaiveDate;
use playbill_model::{CellValue, Record, RunContext, ShowStatus};

/// Far-future close date meaning "no scheduled end".
pub const OPEN_ENDED_SENTINEL: &str = "2099-12-31";

/// Parse a date cell by exact `YYYY-MM-DD` calendar format.
///
/// Blank or case-insensitive `none` means "no date", and so does any value
/// that fails the strict parse. An unparseable date never aborts the run;
/// status derivation falls through to the branches that do not need it.
pub fn parse_show_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Status relative to the run date, evaluated in order.
pub fn derive_status(
    start: Option<NaiveDate>,
    close: Option<NaiveDate>,
    today: NaiveDate,
) -> ShowStatus {
    if start.is_some_and(|date| today < date) {
        return ShowStatus::Future;
    }
    if close.is_some_and(|date| today > date) {
        return ShowStatus::Inactive;
    }
    ShowStatus::Active
}

/// Annotate a record with derived lifecycle fields.
///
/// Adds `status` and, when the soon window is enabled, `coming_soon`,
/// `closing_soon`, and the day deltas. Never removes input fields.
///
/// Date re-serialization is deliberately asymmetric: `start_date` is
/// rewritten to canonical ISO text when it parsed, while `close_date`
/// keeps its original text. The downstream client relies on the current
/// shape, so both behaviors are preserved verbatim.
pub fn annotate(record: &mut Record, ctx: &RunContext) -> ShowStatus {
    let start = parse_show_date(&record.field_text("start_date"));
    let close = parse_close_date(record);

    match start {
        Some(date) => record.insert(
            "start_date",
            CellValue::Text(date.format("%Y-%m-%d").to_string()),
        ),
        None => {
            if !record.contains("start_date") {
                record.insert("start_date", CellValue::Empty);
            }
        }
    }
    if !record.contains("close_date") {
        record.insert("close_date", CellValue::Empty);
    }

    let status = derive_status(start, close, ctx.today);
    record.insert("status", CellValue::Text(status.as_str().to_string()));

    if let Some(window) = ctx.options.soon_window_days {
        let days_until_start = start.map(|date| (date - ctx.today).num_days());
        let days_until_close = close.map(|date| (date - ctx.today).num_days());
        if let Some(days) = days_until_start {
            record.insert("days_until_start", CellValue::Int(days));
        }
        if let Some(days) = days_until_close {
            record.insert("days_until_close", CellValue::Int(days));
        }
        let coming_soon = status == ShowStatus::Future
            && days_until_start.is_some_and(|days| (0..=window).contains(&days));
        let closing_soon = status == ShowStatus::Active
            && days_until_close.is_some_and(|days| (0..=window).contains(&days));
        record.insert("coming_soon", CellValue::Bool(coming_soon));
        record.insert("closing_soon", CellValue::Bool(closing_soon));
    }

    status
}

/// Legacy strict mode predicate: drops records already inactive at the run
/// date. Kept separate from status computation so the two concerns stay
/// independently testable.
pub fn drops_in_strict_mode(record: &Record) -> bool {
    record.field_text("status") == "inactive"
}

/// A close date equal to an open-ended placeholder (blank, `none`, or the
/// far-future sentinel) is treated as "no date", overriding the strict
/// parse. Everything else parses strictly, with failure meaning "no date".
fn parse_close_date(record: &Record) -> Option<NaiveDate> {
    let raw = record.field_text("close_date");
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed == OPEN_ENDED_SENTINEL
    {
        return None;
    }
    parse_show_date(trimmed)
}
