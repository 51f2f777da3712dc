//! Dataset validation errors.

use thiserror::Error;

/// Errors raised while turning raw columns into a [`Dataset`](super::Dataset).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// Payload is not valid JSON.
    #[error("invalid dataset JSON: {0}")]
    InvalidJson(String),

    /// Payload is JSON but not an object of columns.
    #[error("dataset must be a JSON object mapping field names to arrays")]
    NotAnObject,

    /// A field's payload is not an array.
    #[error("field '{0}' is not an array")]
    NotAColumn(String),

    /// A field the MRR engine depends on is absent.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Column length differs from the rest of the table.
    #[error("column '{field}' has {actual} values, expected {expected}")]
    RaggedColumn {
        /// Offending field.
        field: String,
        /// Length shared by the other columns.
        expected: usize,
        /// Length of the offending column.
        actual: usize,
    },

    /// Summed magnitude of `value` leaves the decimal range.
    #[error("value total exceeds the decimal range at record {index}")]
    ValueOverflow {
        /// First record whose value no longer fits.
        index: usize,
    },

    /// A cell holds a value the field cannot accept.
    #[error("invalid value in '{field}' at record {index}: {reason}")]
    InvalidCell {
        /// Field name.
        field: String,
        /// Record index.
        index: usize,
        /// What was wrong with the cell.
        reason: String,
    },
}

impl DatasetError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Create an invalid cell error.
    #[must_use]
    pub fn invalid_cell(field: impl Into<String>, index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidCell {
            field: field.into(),
            index,
            reason: reason.into(),
        }
    }
}
