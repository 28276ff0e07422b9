//! Show records and the raw rows they are assembled from.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::value::CellValue;

/// One raw CSV row: ordered (header, cell text) pairs.
///
/// Order matters only for assembly diagnostics; the assembled [`Record`]
/// imposes its own key ordering.
pub type RawRow = Vec<(String, String)>;

/// A normalized show record keyed by canonical field name.
///
/// Backed by a `BTreeMap` so serialization emits keys in lexicographic
/// order without a separate sort pass. Snapshot determinism depends on this.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: CellValue) {
        self.fields.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Textual form of a field, blank when the field is absent.
    pub fn field_text(&self, key: &str) -> String {
        self.get(key).map(CellValue::display_text).unwrap_or_default()
    }

    /// The trimmed id, or `None` when missing or blank.
    pub fn id_text(&self) -> Option<String> {
        let id = self.field_text("id");
        let trimmed = id.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CellValue)> {
        self.fields.iter()
    }
}
