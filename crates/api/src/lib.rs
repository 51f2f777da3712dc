//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes over the loaded dataset
//! - JSON error responses
//! - Shared application state

pub mod error;
pub mod routes;

#[cfg(test)]
mod test_util;

use std::sync::Arc;

use axum::Router;
use cascade_core::dataset::Dataset;
use cascade_core::selection::SegmentPicker;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
///
/// Read-only after startup; every request brings its own selection.
#[derive(Clone)]
pub struct AppState {
    /// Dataset loaded at startup.
    pub dataset: Arc<Dataset>,
    /// Segment picker configured with the skip list.
    pub picker: Arc<SegmentPicker>,
}

impl AppState {
    /// Creates the state.
    #[must_use]
    pub fn new(dataset: Dataset, picker: SegmentPicker) -> Self {
        Self {
            dataset: Arc::new(dataset),
            picker: Arc::new(picker),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
