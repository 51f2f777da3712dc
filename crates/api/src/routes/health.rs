//! Health check endpoint, with a summary of the loaded dataset.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// What the dashboard is computed over.
    pub dataset: DatasetSummary,
}

/// Shape of the dataset held in memory.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    /// Number of records.
    pub records: usize,
    /// Number of distinct months.
    pub months: usize,
    /// Greatest month, the breakdown period.
    pub last_month: Option<String>,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let dataset = &state.dataset;
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        dataset: DatasetSummary {
            records: dataset.len(),
            months: dataset.months().len(),
            last_month: dataset.last_month().map(str::to_string),
        },
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
