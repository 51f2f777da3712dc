//! Dataset loading errors.

use cascade_core::dataset::DatasetError;

/// Error types for dataset loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Bundled file could not be read.
    #[error("Failed to read dataset file '{path}': {source}")]
    Io {
        /// File path.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Request to the remote endpoint failed.
    #[error("Failed to fetch dataset: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote endpoint answered with a non-success status.
    #[error("Dataset endpoint returned {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Payload is not a valid columnar dataset.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
