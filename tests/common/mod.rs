//! Common test utilities

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::{middleware, Router};
use serde_json::Value;
use tempfile::TempDir;
use tower::util::ServiceExt;

use pace_events::api::{self, AppState};
use pace_events::gateway::GeminiGateway;
use pace_events::session::SessionStore;
use pace_events::store::EventStore;

/// Build the API router over a fresh temporary data directory
///
/// The gateway is left unconfigured so AI surfaces answer with their
/// fallbacks instead of reaching the network.
pub fn setup_test_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().expect("Failed to create temp data dir");

    let state = AppState::new(
        EventStore::open(dir.path()),
        SessionStore::open(dir.path()),
        GeminiGateway::new(None),
    );

    let app = api::create_router()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::middleware::session_middleware,
        ))
        .with_state(state);

    (dir, app)
}

/// One request against the router
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

/// Decode a response body as JSON
pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Open a session through the login endpoint
pub async fn login(app: &Router, payload: Value) {
    let response = send(app, "POST", "/auth/login", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::OK, "login failed");
}
