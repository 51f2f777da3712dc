//! Drill-down selection: one dimension plus the values it is filtered to.
//!
//! A selection is both a row filter (only records whose `bucket_name` cell is
//! one of `bucket_values` are aggregated) and the grouping key of the
//! last-period breakdown. Absence of a selection means no filter and no
//! breakdown. Selections are replaced wholesale; every transition returns a
//! new value.

pub mod picker;

pub use picker::{DEFAULT_SKIP_FIELDS, SegmentPicker};

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// Active drill-down filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSelection")]
pub struct Selection {
    bucket_name: String,
    bucket_values: Vec<String>,
}

/// Wire shape; deduplicated on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSelection {
    bucket_name: String,
    #[serde(default)]
    bucket_values: Vec<String>,
}

impl From<RawSelection> for Selection {
    fn from(raw: RawSelection) -> Self {
        Self::new(raw.bucket_name, raw.bucket_values)
    }
}

impl Selection {
    /// Creates a selection, keeping first-seen order and dropping duplicates.
    #[must_use]
    pub fn new<I, S>(bucket_name: impl Into<String>, bucket_values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values: Vec<String> = Vec::new();
        for value in bucket_values {
            let value = value.into();
            if !values.contains(&value) {
                values.push(value);
            }
        }

        Self {
            bucket_name: bucket_name.into(),
            bucket_values: values,
        }
    }

    /// Selects every value observed in `field`, sorted ascending.
    #[must_use]
    pub fn for_dimension(dataset: &Dataset, field: &str) -> Self {
        Self {
            bucket_name: field.to_string(),
            bucket_values: dataset.distinct_values(field),
        }
    }

    /// Dimension the selection filters and groups by.
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// Allowed values, in selection order.
    #[must_use]
    pub fn bucket_values(&self) -> &[String] {
        &self.bucket_values
    }

    /// Returns true if no value is allowed (nothing matches).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bucket_values.is_empty()
    }

    /// Returns true if `value` is one of the allowed values.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.bucket_values.iter().any(|v| v == value)
    }

    /// Returns true if record `index` passes the filter.
    ///
    /// Unknown fields and non-string cells never match.
    #[must_use]
    pub fn matches(&self, dataset: &Dataset, index: usize) -> bool {
        dataset
            .text(&self.bucket_name, index)
            .is_some_and(|value| self.contains(value))
    }

    /// Replaces the value set on the same dimension.
    ///
    /// An empty value set clears the selection.
    #[must_use]
    pub fn with_values<I, S>(&self, values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next = Self::new(self.bucket_name.clone(), values);
        (!next.is_empty()).then_some(next)
    }

    /// Removes `value` if selected, otherwise appends it.
    #[must_use]
    pub fn toggle_value(&self, value: &str) -> Option<Self> {
        if self.contains(value) {
            self.with_values(self.bucket_values.iter().filter(|v| *v != value).cloned())
        } else {
            self.with_values(
                self.bucket_values
                    .iter()
                    .cloned()
                    .chain(std::iter::once(value.to_string())),
            )
        }
    }

    /// Clears when every option is already selected, otherwise selects all
    /// options in option order.
    #[must_use]
    pub fn toggle_all(&self, options: &[String]) -> Option<Self> {
        if options.iter().all(|option| self.contains(option)) {
            None
        } else {
            self.with_values(options.iter().cloned())
        }
    }

    /// Human readable label, e.g. `pro, basic`.
    #[must_use]
    pub fn label(&self) -> String {
        self.bucket_values.join(", ")
    }
}
