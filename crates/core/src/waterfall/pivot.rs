//! Bucket x month pivot.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::dataset::Dataset;
use crate::selection::Selection;

/// Totals keyed by bucket label, then month.
///
/// Only cells that received at least one contribution are present;
/// consumers read missing cells as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Pivot {
    cells: BTreeMap<String, BTreeMap<String, Decimal>>,
}

impl Pivot {
    /// Total at `(bucket, month)`, if any record contributed.
    #[must_use]
    pub fn get(&self, bucket: &str, month: &str) -> Option<Decimal> {
        self.cells.get(bucket)?.get(month).copied()
    }

    /// Total at `(bucket, month)`, zero when absent.
    #[must_use]
    pub fn value_or_zero(&self, bucket: &str, month: &str) -> Decimal {
        self.get(bucket, month).unwrap_or(Decimal::ZERO)
    }

    /// Month totals of one bucket.
    #[must_use]
    pub fn row(&self, bucket: &str) -> Option<&BTreeMap<String, Decimal>> {
        self.cells.get(bucket)
    }

    /// Buckets that received contributions, ascending.
    pub fn buckets(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Returns true if no record contributed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sum over every cell.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cells.values().flat_map(BTreeMap::values).copied().sum()
    }

    fn add(mut self, bucket: &str, month: &str, amount: Decimal) -> Self {
        *self
            .cells
            .entry(bucket.to_string())
            .or_default()
            .entry(month.to_string())
            .or_default() += amount;
        self
    }
}

/// Pivots the dataset into `bucket x month` totals.
///
/// For each record (in record order) and each label in `bucket_labels`,
/// the record's `value` is added at `[label][month]` when its
/// `bucket_field` cell equals the label. With a selection, records whose
/// selection cell is not a string in `bucket_values` contribute nothing.
/// Without a selection every record is considered.
#[must_use]
pub fn pivot<L: AsRef<str>>(
    dataset: &Dataset,
    bucket_field: &str,
    bucket_labels: &[L],
    selection: Option<&Selection>,
) -> Pivot {
    (0..dataset.len())
        .filter(|&index| selection.is_none_or(|s| s.matches(dataset, index)))
        .fold(Pivot::default(), |acc, index| {
            let (Some(bucket), Some(month)) = (dataset.text(bucket_field, index), dataset.month(index))
            else {
                return acc;
            };
            let amount = dataset.amount(index);

            bucket_labels
                .iter()
                .filter(|label| label.as_ref() == bucket)
                .fold(acc, |acc, label| acc.add(label.as_ref(), month, amount))
        })
}
