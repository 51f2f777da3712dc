//! Segment picker: which dimensions can be drilled into, and their values.

use crate::dataset::Dataset;

use super::Selection;

/// Fields that are never offered as segments.
pub const DEFAULT_SKIP_FIELDS: [&str; 4] = ["month", "subscription_id", "value", "bucket"];

/// Candidate dimensions of a dataset, minus a skip list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPicker {
    skip_fields: Vec<String>,
}

impl SegmentPicker {
    /// Creates a picker that hides `skip_fields`.
    #[must_use]
    pub fn new<I, S>(skip_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skip_fields: skip_fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Fields hidden from the picker.
    #[must_use]
    pub fn skip_fields(&self) -> &[String] {
        &self.skip_fields
    }

    /// Candidate dimension names, ascending.
    #[must_use]
    pub fn dimensions(&self, dataset: &Dataset) -> Vec<String> {
        dataset
            .field_names()
            .filter(|name| !self.is_skipped(name))
            .map(str::to_string)
            .collect()
    }

    /// Distinct sorted values of a dimension (empty for unknown fields).
    #[must_use]
    pub fn values(&self, dataset: &Dataset, dimension: &str) -> Vec<String> {
        dataset.distinct_values(dimension)
    }

    /// Picks a segment, selecting all of its observed values.
    ///
    /// Returns `None` for a field the dataset does not have.
    #[must_use]
    pub fn select_segment(&self, dataset: &Dataset, dimension: &str) -> Option<Selection> {
        dataset
            .has_field(dimension)
            .then(|| Selection::for_dimension(dataset, dimension))
    }

    fn is_skipped(&self, name: &str) -> bool {
        self.skip_fields.iter().any(|skip| skip == name)
    }
}

impl Default for SegmentPicker {
    fn default() -> Self {
        Self::new(DEFAULT_SKIP_FIELDS)
    }
}
