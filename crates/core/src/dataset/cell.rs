//! Cell values of the columnar dataset.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

/// A single cell: the source format only carries strings and numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// String cell (months, buckets, dimension values).
    Text(String),
    /// Numeric cell.
    Number(Decimal),
}

impl CellValue {
    /// Creates a text cell.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns the string content, or `None` for numeric cells.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Returns the numeric content, or `None` for text cells.
    #[must_use]
    pub const fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Reads a cell from a JSON value.
    ///
    /// Only strings and numbers are accepted; the error is a short reason.
    pub fn from_json(value: &Value) -> Result<Self, String> {
        match value {
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Number(n) => parse_decimal(&n.to_string())
                .map(Self::Number)
                .ok_or_else(|| format!("number {n} is out of range")),
            Value::Null => Err("null is not a valid cell".to_string()),
            Value::Bool(_) => Err("booleans are not valid cells".to_string()),
            Value::Array(_) | Value::Object(_) => Err("nested values are not valid cells".to_string()),
        }
    }

    /// Coerces the cell to a number, accepting numeric strings.
    #[must_use]
    pub fn to_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => parse_decimal(s.trim()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Decimal> for CellValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

/// Parses plain or scientific decimal notation.
fn parse_decimal(raw: &str) -> Option<Decimal> {
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_from_json_string_and_number() {
        assert_eq!(CellValue::from_json(&json!("pro")), Ok(CellValue::text("pro")));
        assert_eq!(
            CellValue::from_json(&json!(120.5)),
            Ok(CellValue::Number(dec!(120.5)))
        );
        assert_eq!(CellValue::from_json(&json!(42)), Ok(CellValue::Number(dec!(42))));
    }

    #[test]
    fn test_from_json_rejects_other_values() {
        assert!(CellValue::from_json(&json!(null)).is_err());
        assert!(CellValue::from_json(&json!(true)).is_err());
        assert!(CellValue::from_json(&json!([1])).is_err());
        assert!(CellValue::from_json(&json!({"a": 1})).is_err());
    }

    #[test]
    fn test_to_number_coerces_numeric_text() {
        assert_eq!(CellValue::text("12.25").to_number(), Some(dec!(12.25)));
        assert_eq!(CellValue::text(" 7 ").to_number(), Some(dec!(7)));
        assert_eq!(CellValue::text("1e2").to_number(), Some(dec!(100)));
        assert_eq!(CellValue::text("abc").to_number(), None);
        assert_eq!(CellValue::text("").to_number(), None);
    }

    #[test]
    fn test_accessors() {
        let text = CellValue::text("2024-01");
        assert_eq!(text.as_text(), Some("2024-01"));
        assert_eq!(text.as_number(), None);

        let number = CellValue::Number(dec!(3));
        assert_eq!(number.as_text(), None);
        assert_eq!(number.as_number(), Some(dec!(3)));
    }

    #[test]
    fn test_serializes_untagged() {
        assert_eq!(serde_json::to_value(CellValue::text("eu")).unwrap(), json!("eu"));
        assert_eq!(
            serde_json::to_value(CellValue::Number(dec!(10))).unwrap(),
            json!(10.0)
        );
    }
}
