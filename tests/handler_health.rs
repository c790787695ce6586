mod common;

use admin_dashboard::api::handlers::health_handler;
use admin_dashboard::state::AppState;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use std::sync::Arc;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::loaded_state(Arc::new(common::sample_store())).await;
    let server = make_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["record_store"]["status"], "ok");
    assert_eq!(json["checks"]["snapshot"]["status"], "ok");
}

#[tokio::test]
async fn test_health_while_loading_is_healthy() {
    let server = make_server(AppState::new(Arc::new(common::sample_store())));

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["snapshot"]["message"], "Loading");
}

#[tokio::test]
async fn test_health_degraded_when_store_fails() {
    let state = common::loaded_state(Arc::new(common::FailingStore::default())).await;
    let server = make_server(state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["record_store"]["status"], "error");
    assert_eq!(json["checks"]["snapshot"]["status"], "error");
}
