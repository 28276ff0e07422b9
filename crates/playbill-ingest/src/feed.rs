//! CSV feed decoding and parsing.

use playbill_model::RawRow;

use crate::error::Result;

/// Decode feed bytes as UTF-8, replacing invalid sequences.
///
/// The published export occasionally carries stray Latin-1 bytes; a lossy
/// decode keeps the run alive rather than failing on one bad cell.
pub fn decode_feed(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Parse feed text into raw rows keyed by the header line.
///
/// The first record is the header row. Record lengths are flexible: short
/// rows pad with empty cells and surplus cells without a header are dropped,
/// matching spreadsheet-export behavior where trailing columns come and go.
pub fn parse_feed(text: &str) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            // Strip a UTF-8 BOM from the first header cell if present
            if idx == 0 {
                header.strip_prefix('\u{feff}').unwrap_or(header).to_string()
            } else {
                header.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let cell = record.get(idx).unwrap_or("");
                (header.clone(), cell.to_string())
            })
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_keyed_rows_in_order() {
        let rows = parse_feed("ID,title\n1,Cats\n2,Evita\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            vec![
                ("ID".to_string(), "1".to_string()),
                ("title".to_string(), "Cats".to_string()),
            ]
        );
        assert_eq!(rows[1][1].1, "Evita");
    }

    #[test]
    fn short_rows_pad_with_empty_cells() {
        let rows = parse_feed("ID,title,venue\n1,Cats\n").unwrap();
        assert_eq!(rows[0][2], ("venue".to_string(), String::new()));
    }

    #[test]
    fn surplus_cells_without_headers_are_dropped() {
        let rows = parse_feed("ID,title\n1,Cats,extra\n").unwrap();
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn bom_is_stripped_from_first_header() {
        let rows = parse_feed("\u{feff}ID,title\n1,Cats\n").unwrap();
        assert_eq!(rows[0][0].0, "ID");
    }

    #[test]
    fn lossy_decode_replaces_invalid_bytes() {
        let decoded = decode_feed(b"ID,title\n1,Caf\xe9\n");
        assert!(decoded.contains('\u{fffd}'));
    }
}
