//! Typed cell values produced by feed normalization.

use std::fmt;

use serde::{Serialize, Serializer};

/// A normalized feed cell.
///
/// The feed distinguishes an absent cell from one explicitly marked
/// open-ended: empty cells serialize as `""` and the literal `none` survives
/// as the string `"none"`. Neither ever becomes JSON null, because the
/// downstream client treats null and missing-key as schema drift.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Absent or whitespace-only cell; serializes as `""`.
    Empty,
    /// The case-insensitive literal `none`; serializes as `"none"`.
    NoneLiteral,
    Int(i64),
    Float(f64),
    /// Derived flags only; normalization never produces booleans.
    Bool(bool),
    Text(String),
}

impl CellValue {
    /// The textual form used for id comparison and date parsing.
    ///
    /// `Empty` renders as an empty string and `NoneLiteral` as `none`, so
    /// callers can apply blank/placeholder checks uniformly.
    pub fn display_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::NoneLiteral => "none".to_string(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }

    /// True for cells that render as blank text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_str(""),
            Self::NoneLiteral => serializer.serialize_str("none"),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_round_trips_scalars() {
        assert_eq!(CellValue::Int(-3).display_text(), "-3");
        assert_eq!(CellValue::Float(1.5).display_text(), "1.5");
        assert_eq!(CellValue::Empty.display_text(), "");
        assert_eq!(CellValue::NoneLiteral.display_text(), "none");
    }

    #[test]
    fn blank_detection_covers_whitespace_text() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Text("   ".to_string()).is_blank());
        assert!(!CellValue::Int(0).is_blank());
        assert!(!CellValue::NoneLiteral.is_blank());
    }

    #[test]
    fn serializes_each_variant() {
        let json = serde_json::to_string(&CellValue::Float(2.5)).unwrap();
        assert_eq!(json, "2.5");
        let json = serde_json::to_string(&CellValue::Bool(true)).unwrap();
        assert_eq!(json, "true");
        let json = serde_json::to_string(&CellValue::Empty).unwrap();
        assert_eq!(json, "\"\"");
    }
}
