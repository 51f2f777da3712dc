//! Segment picker routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
};
use cascade_shared::AppError;
use serde::Serialize;

use crate::{AppState, error::error_response};

/// Creates the dimension routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dimensions", get(list_dimensions))
        .route("/dimensions/{name}/values", get(dimension_values))
}

/// Candidate segments.
#[derive(Debug, Serialize)]
pub struct DimensionsResponse {
    /// Field names offered by the picker, ascending.
    pub dimensions: Vec<String>,
}

/// GET /dimensions
async fn list_dimensions(State(state): State<AppState>) -> Json<DimensionsResponse> {
    Json(DimensionsResponse {
        dimensions: state.picker.dimensions(&state.dataset),
    })
}

/// GET /dimensions/{name}/values
///
/// Returns the default selection for the segment: every observed value.
async fn dimension_values(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.picker.select_segment(&state.dataset, &name) {
        Some(selection) => Json(selection).into_response(),
        None => error_response(&AppError::NotFound(format!("Segment '{name}'"))),
    }
}
