//! Raw row to record assembly.

use playbill_model::{RawRow, Record};

use crate::normalize::{canonical_key, normalize};

/// Assemble a raw row into a normalized record.
///
/// Rows where every cell is blank after trimming are spreadsheet padding,
/// not logical records; they return `None`. Columns whose canonical key is
/// blank (a blank header cell) are skipped. Field order in the record is
/// insignificant; the snapshot writer imposes its own ordering.
pub fn assemble(row: &RawRow) -> Option<Record> {
    if row.iter().all(|(_, cell)| cell.trim().is_empty()) {
        return None;
    }
    let mut record = Record::new();
    for (header, cell) in row {
        let key = canonical_key(header);
        if key.is_empty() {
            continue;
        }
        record.insert(key, normalize(Some(cell)));
    }
    Some(record)
}
