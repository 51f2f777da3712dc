//! Where the dataset comes from, and the one-shot load.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use cascade_core::dataset::Dataset;
use cascade_shared::config::DatasetConfig;
use tracing::{debug, info};

use crate::error::LoadError;

/// Dataset location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Bundled JSON file.
    File(PathBuf),
    /// Single network endpoint serving the columnar JSON.
    Url(String),
}

impl DatasetSource {
    /// Picks the configured source; a URL wins over the file path.
    #[must_use]
    pub fn from_config(config: &DatasetConfig) -> Self {
        match &config.url {
            Some(url) if !url.trim().is_empty() => Self::Url(url.clone()),
            _ => Self::File(PathBuf::from(&config.path)),
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file:{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Loads and validates the dataset once.
///
/// There are no retries: any failure is returned to the caller, which is
/// expected to give up before serving.
///
/// # Errors
///
/// Returns `LoadError` if the source cannot be read or fetched, or if the
/// payload is not a valid columnar dataset.
pub async fn load(source: &DatasetSource, timeout: Duration) -> Result<Dataset, LoadError> {
    debug!(source = %source, "Loading dataset");

    let raw = match source {
        DatasetSource::File(path) => read_file(path).await?,
        DatasetSource::Url(url) => fetch(url, timeout).await?,
    };

    let dataset = Dataset::from_json_slice(&raw)?;

    info!(
        source = %source,
        records = dataset.len(),
        fields = dataset.field_names().count(),
        "Dataset loaded"
    );
    Ok(dataset)
}

async fn read_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

async fn fetch(url: &str, timeout: Duration) -> Result<Vec<u8>, LoadError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            status: status.as_u16(),
        });
    }

    Ok(response.bytes().await?.to_vec())
}
