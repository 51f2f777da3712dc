//! Dashboard routes.
//!
//! Every request recomputes the whole view from the shared dataset and the
//! selection it carries. Nothing is cached between requests.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::get,
};
use cascade_core::dashboard::DashboardView;
use cascade_core::selection::Selection;
use cascade_shared::{AppError, AppResult};
use serde::Deserialize;
use tracing::debug;

use crate::{AppState, error::error_response};

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard).post(post_dashboard))
}

// ============================================================================
// Request Types
// ============================================================================

/// Query parameters for the dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Segment field to drill into.
    pub segment: Option<String>,
    /// Comma-separated values; all observed values when absent.
    pub values: Option<String>,
}

impl DashboardQuery {
    /// Resolves the query into a selection.
    fn selection(&self, state: &AppState) -> AppResult<Option<Selection>> {
        match (&self.segment, &self.values) {
            (None, None) => Ok(None),
            (None, Some(_)) => Err(AppError::Validation(
                "`values` requires `segment`".to_string(),
            )),
            (Some(segment), None) => state
                .picker
                .select_segment(&state.dataset, segment)
                .map(Some)
                .ok_or_else(|| AppError::NotFound(format!("Segment '{segment}'"))),
            (Some(segment), Some(values)) => Ok(Some(Selection::new(
                segment.as_str(),
                values.split(',').filter(|v| !v.is_empty()),
            ))),
        }
    }
}

/// Request body for the dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardRequest {
    /// Selection to apply, taken as given; `null` for none.
    #[serde(default)]
    pub selection: Option<Selection>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /dashboard?segment=&values=
async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    match query.selection(&state) {
        Ok(selection) => render(&state, selection.as_ref()),
        Err(e) => error_response(&e),
    }
}

/// POST /dashboard
async fn post_dashboard(
    State(state): State<AppState>,
    payload: Result<Json<DashboardRequest>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(request)) => render(&state, request.selection.as_ref()),
        Err(rejection) => error_response(&AppError::Validation(rejection.body_text())),
    }
}

fn render(state: &AppState, selection: Option<&Selection>) -> Response {
    debug!(
        segment = selection.map(Selection::bucket_name),
        values = ?selection.map(Selection::bucket_values),
        "Recomputing dashboard"
    );
    Json(DashboardView::compute(&state.dataset, selection)).into_response()
}
