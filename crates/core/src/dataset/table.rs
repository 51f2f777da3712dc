//! Column-oriented MRR dataset.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::cell::CellValue;
use super::error::DatasetError;

/// Field holding the period key (`YYYY-MM`).
pub const MONTH_FIELD: &str = "month";
/// Field holding the MRR bucket label.
pub const BUCKET_FIELD: &str = "bucket";
/// Field holding the revenue amount.
pub const VALUE_FIELD: &str = "value";

/// Fields every MRR dataset must carry.
pub const REQUIRED_FIELDS: [&str; 3] = [MONTH_FIELD, BUCKET_FIELD, VALUE_FIELD];

/// Immutable column-oriented table of N records.
///
/// Every column has the same length; record `i` is the tuple of cells at
/// index `i` across all columns. Lookups by field name fail closed: an
/// unknown field behaves like a column of non-matching cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: BTreeMap<String, Vec<CellValue>>,
    len: usize,
}

impl Dataset {
    /// Validates raw columns into a dataset.
    ///
    /// `month` and `bucket` must be text, `value` must be numeric (numeric
    /// strings are coerced) and every column must share the same length.
    /// The sum of absolute values must fit in a `Decimal`, so no aggregate
    /// over any subset of records can overflow.
    pub fn from_columns(
        mut columns: BTreeMap<String, Vec<CellValue>>,
    ) -> Result<Self, DatasetError> {
        for field in REQUIRED_FIELDS {
            if !columns.contains_key(field) {
                return Err(DatasetError::missing_field(field));
            }
        }

        let len = columns.get(MONTH_FIELD).map_or(0, Vec::len);
        for (field, cells) in &columns {
            if cells.len() != len {
                return Err(DatasetError::RaggedColumn {
                    field: field.clone(),
                    expected: len,
                    actual: cells.len(),
                });
            }
        }

        for field in [MONTH_FIELD, BUCKET_FIELD] {
            if let Some(cells) = columns.get(field) {
                if let Some(index) = cells.iter().position(|c| c.as_text().is_none()) {
                    return Err(DatasetError::invalid_cell(field, index, "expected a string"));
                }
            }
        }

        if let Some(cells) = columns.get_mut(VALUE_FIELD) {
            // bounds every pivot, baseline and breakdown total
            let mut magnitude = Decimal::ZERO;
            for (index, cell) in cells.iter_mut().enumerate() {
                let number = cell
                    .to_number()
                    .ok_or_else(|| DatasetError::invalid_cell(VALUE_FIELD, index, "expected a number"))?;
                magnitude = magnitude
                    .checked_add(number.abs())
                    .ok_or(DatasetError::ValueOverflow { index })?;
                *cell = CellValue::Number(number);
            }
        }

        Ok(Self { columns, len })
    }

    /// Validates a JSON object of `{ field: [cells] }`.
    pub fn from_json_value(value: Value) -> Result<Self, DatasetError> {
        let Value::Object(map) = value else {
            return Err(DatasetError::NotAnObject);
        };

        let mut columns = BTreeMap::new();
        for (field, raw) in map {
            let Value::Array(items) = raw else {
                return Err(DatasetError::NotAColumn(field));
            };
            let cells = items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    CellValue::from_json(item)
                        .map_err(|reason| DatasetError::invalid_cell(&field, index, reason))
                })
                .collect::<Result<Vec<_>, _>>()?;
            columns.insert(field, cells);
        }

        Self::from_columns(columns)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, DatasetError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| DatasetError::InvalidJson(e.to_string()))?;
        Self::from_json_value(value)
    }

    /// Parses and validates a JSON document from raw bytes.
    pub fn from_json_slice(raw: &[u8]) -> Result<Self, DatasetError> {
        let value: Value =
            serde_json::from_slice(raw).map_err(|e| DatasetError::InvalidJson(e.to_string()))?;
        Self::from_json_value(value)
    }

    /// Number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the dataset has no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Field names in ascending order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Returns true if the field exists.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.columns.contains_key(field)
    }

    /// Cells of a field, if present.
    #[must_use]
    pub fn column(&self, field: &str) -> Option<&[CellValue]> {
        self.columns.get(field).map(Vec::as_slice)
    }

    /// Text cell at `(field, index)`.
    ///
    /// `None` when the field is unknown, the index is out of range, or the
    /// cell is numeric.
    #[must_use]
    pub fn text(&self, field: &str, index: usize) -> Option<&str> {
        self.columns
            .get(field)
            .and_then(|cells| cells.get(index))
            .and_then(CellValue::as_text)
    }

    /// Month of record `index`.
    #[must_use]
    pub fn month(&self, index: usize) -> Option<&str> {
        self.text(MONTH_FIELD, index)
    }

    /// Bucket label of record `index`.
    #[must_use]
    pub fn bucket(&self, index: usize) -> Option<&str> {
        self.text(BUCKET_FIELD, index)
    }

    /// Amount of record `index`; zero when absent.
    #[must_use]
    pub fn amount(&self, index: usize) -> Decimal {
        self.columns
            .get(VALUE_FIELD)
            .and_then(|cells| cells.get(index))
            .and_then(CellValue::as_number)
            .unwrap_or(Decimal::ZERO)
    }

    /// Distinct months, sorted ascending as strings.
    #[must_use]
    pub fn months(&self) -> Vec<String> {
        self.distinct_values(MONTH_FIELD)
    }

    /// The lexicographically greatest month, regardless of record order.
    #[must_use]
    pub fn last_month(&self) -> Option<&str> {
        self.column(MONTH_FIELD)?
            .iter()
            .filter_map(CellValue::as_text)
            .max()
    }

    /// Distinct text values of a field, sorted ascending.
    ///
    /// Numeric cells are skipped; an unknown field yields an empty list.
    #[must_use]
    pub fn distinct_values(&self, field: &str) -> Vec<String> {
        self.column(field)
            .map(|cells| {
                cells
                    .iter()
                    .filter_map(CellValue::as_text)
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.columns.serialize(serializer)
    }
}
