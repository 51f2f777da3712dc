//! Read-only waterfall grid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::format::format_grouped;
use crate::waterfall::{MrrBucket, Pivot};

/// Key of the row-label column.
pub const BUCKET_COLUMN: &str = "bucket";

/// Header of the row-label column.
pub const BUCKET_COLUMN_TITLE: &str = "Breakdown";

/// Rendered value of a cell no record contributed to.
pub const EMPTY_CELL: &str = "0";

/// Column cell editor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Plain text.
    Text,
}

/// Grid column definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridColumn {
    /// Row key the column reads.
    pub name: String,
    /// Header text.
    pub title: String,
    /// Cell type.
    #[serde(rename = "type")]
    pub kind: ColumnKind,
}

impl GridColumn {
    fn text(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            kind: ColumnKind::Text,
        }
    }
}

/// One bucket's row: the label plus one pre-formatted cell per month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    /// Canonical bucket label.
    pub bucket: String,
    /// Formatted cells keyed by month.
    #[serde(flatten)]
    pub cells: BTreeMap<String, String>,
}

impl GridRow {
    /// Cell for a month.
    #[must_use]
    pub fn cell(&self, month: &str) -> Option<&str> {
        self.cells.get(month).map(String::as_str)
    }
}

/// Columns and rows ready for the grid widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Label column followed by one column per month.
    pub columns: Vec<GridColumn>,
    /// One row per canonical bucket.
    pub rows: Vec<GridRow>,
}

impl Grid {
    /// Builds the grid for `months` from a pivot.
    #[must_use]
    pub fn from_pivot(pivot: &Pivot, months: &[String]) -> Self {
        Self {
            columns: grid_columns(months),
            rows: grid_rows(pivot, months),
        }
    }
}

/// `bucket` column followed by one text column per month.
#[must_use]
pub fn grid_columns(months: &[String]) -> Vec<GridColumn> {
    std::iter::once(GridColumn::text(BUCKET_COLUMN, BUCKET_COLUMN_TITLE))
        .chain(months.iter().map(|month| GridColumn::text(month, month)))
        .collect()
}

/// One row per canonical bucket, in canonical order.
///
/// Cells without contributions render as `"0"`; the rest are grouped
/// decimal strings.
#[must_use]
pub fn grid_rows(pivot: &Pivot, months: &[String]) -> Vec<GridRow> {
    MrrBucket::ALL
        .iter()
        .map(|bucket| {
            let label = bucket.label();
            let cells = months
                .iter()
                .map(|month| {
                    let cell = pivot
                        .get(label, month)
                        .map_or_else(|| EMPTY_CELL.to_string(), format_grouped);
                    (month.clone(), cell)
                })
                .collect();

            GridRow {
                bucket: label.to_string(),
                cells,
            }
        })
        .collect()
}
