//! Visibility and identity filtering.

use std::collections::BTreeSet;

use playbill_model::{CellValue, PipelineOptions, Record};

/// Outcome of the record filter for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    Keep,
    /// Hidden rows leave no trace in the diagnostics.
    DropSilently,
    /// Structural problems (missing id, duplicate id) warrant a warning.
    DropWithWarning(String),
}

/// Decide whether a record survives, in fixed short-circuit order:
/// visibility, required id, id uniqueness.
///
/// The seen-id set is scoped to one run and threaded through explicitly;
/// the first occurrence of an id wins and later duplicates are dropped.
pub fn accept(
    record: &Record,
    options: &PipelineOptions,
    seen_ids: &mut BTreeSet<String>,
) -> FilterDecision {
    if options.enforce_visibility && !is_visible(record) {
        return FilterDecision::DropSilently;
    }
    let Some(id) = record.id_text() else {
        return FilterDecision::DropWithWarning("row missing id".to_string());
    };
    if !seen_ids.insert(id.clone()) {
        return FilterDecision::DropWithWarning(format!("duplicate id '{id}'"));
    }
    FilterDecision::Keep
}

/// Visible iff `visible_on_app` is exactly the integer `1` or the text
/// `"1"`. Missing or blank defaults to not visible (fail-closed).
fn is_visible(record: &Record) -> bool {
    match record.get("visible_on_app") {
        Some(CellValue::Int(value)) => *value == 1,
        Some(CellValue::Text(text)) => text.trim() == "1",
        _ => false,
    }
}
