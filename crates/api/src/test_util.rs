//! Helpers for driving the router in-process.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use cascade_core::dataset::Dataset;
use cascade_core::selection::SegmentPicker;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::{AppState, create_router};

/// Three Ending MRR records over two months and two plans.
pub fn test_state() -> AppState {
    let dataset = Dataset::from_json_value(json!({
        "month": ["2024-01", "2024-01", "2024-02"],
        "subscription_id": ["s1", "s2", "s1"],
        "bucket": ["6. Ending MRR", "6. Ending MRR", "6. Ending MRR"],
        "plan": ["pro", "basic", "pro"],
        "region": ["eu", "us", "eu"],
        "value": [100, 50, 120]
    }))
    .unwrap();

    AppState::new(dataset, SegmentPicker::default())
}

/// Full application router over `test_state`.
pub fn test_app() -> Router {
    create_router(test_state())
}

/// Sends one request and returns the status and JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// `GET uri`.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// `POST uri` with a JSON body.
pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
