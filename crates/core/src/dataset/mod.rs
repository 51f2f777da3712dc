//! Columnar MRR dataset.
//!
//! The dataset is loaded once per session and never mutated. It is a
//! validated mapping from field name to column; every column has the same
//! length.

pub mod cell;
pub mod error;
pub mod table;

pub use cell::CellValue;
pub use error::DatasetError;
pub use table::{BUCKET_FIELD, Dataset, MONTH_FIELD, REQUIRED_FIELDS, VALUE_FIELD};
