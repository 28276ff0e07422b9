//! Schema-agnostic cell normalization.

use playbill_model::CellValue;

/// Map a raw column header to its canonical field name.
///
/// The feed's first column is conventionally headed `ID`; it becomes the
/// required `id` field. Every other header passes through unchanged, case
/// included, so the pipeline stays agnostic to columns it does not derive.
pub fn canonical_key(header: &str) -> &str {
    let trimmed = header.trim();
    if trimmed == "ID" { "id" } else { trimmed }
}

/// Normalize one raw cell into a typed value.
///
/// Pure function. Classification order matters:
/// absent/whitespace-only → [`CellValue::Empty`]; the case-insensitive
/// literal `none` → [`CellValue::NoneLiteral`]; `^-?[0-9]+$` → integer;
/// text containing a `.` and at least one digit → float; everything else
/// keeps its trimmed text. A numeric-looking cell that fails to parse
/// degrades silently to text rather than aborting the run.
pub fn normalize(cell: Option<&str>) -> CellValue {
    let Some(raw) = cell else {
        return CellValue::Empty;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    if trimmed.eq_ignore_ascii_case("none") {
        return CellValue::NoneLiteral;
    }
    if looks_like_integer(trimmed) {
        // i64 overflow on absurdly long digit runs keeps the text
        return match trimmed.parse::<i64>() {
            Ok(value) => CellValue::Int(value),
            Err(_) => CellValue::Text(trimmed.to_string()),
        };
    }
    if trimmed.contains('.') && trimmed.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(value) = trimmed.parse::<f64>() {
            return CellValue::Float(value);
        }
    }
    CellValue::Text(trimmed.to_string())
}

/// True iff the text matches `^-?[0-9]+$` (ASCII digits only).
fn looks_like_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
