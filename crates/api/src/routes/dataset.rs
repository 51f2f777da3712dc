//! Raw dataset endpoint.
//!
//! Serves the loaded columnar JSON in the same shape a remote dataset
//! endpoint would, so one instance can feed another.

use axum::{
    Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use cascade_shared::AppError;

use crate::{AppState, error::error_response};

/// Creates the dataset routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dataset", get(get_dataset))
}

/// GET /dataset
async fn get_dataset(State(state): State<AppState>) -> Response {
    match serde_json::to_vec(state.dataset.as_ref()) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => error_response(&AppError::Internal(format!("Failed to encode dataset: {e}"))),
    }
}
