mod common;

use admin_dashboard::state::AppState;
use admin_dashboard::web;
use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .nest("/dashboard", web::routes::routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_dashboard_shows_placeholder_while_loading() {
    let state = AppState::new(Arc::new(common::sample_store()));
    let server = make_server(state);

    let response = server.get("/dashboard").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("data-loading"));
    assert!(!html.contains("Welcome back"));
    assert!(!html.contains("First Stat"));
}

#[tokio::test]
async fn test_dashboard_renders_banner_from_settings() {
    let state = common::loaded_state(Arc::new(common::sample_store())).await;
    let server = make_server(state);

    let html = server.get("/dashboard").await.text();

    assert!(html.contains("<h1>Welcome back, Alex!</h1>"));
    assert!(html.contains(r#"<p class="subtitle">Hi</p>"#));
    assert!(!html.contains("data-loading"));
}

#[tokio::test]
async fn test_dashboard_renders_stats_in_sort_order() {
    let state = common::loaded_state(Arc::new(common::sample_store())).await;
    let server = make_server(state);

    let html = server.get("/dashboard").await.text();

    let first = html.find("First Stat").expect("first stat rendered");
    let second = html.find("Second Stat").expect("second stat rendered");
    assert!(first < second);
    assert!(html.contains("trend-down"));
    assert!(html.contains("trend-up"));
    assert!(html.contains("Launch Campaign"));
}

#[tokio::test]
async fn test_dashboard_falls_back_when_every_read_fails() {
    let state = common::loaded_state(Arc::new(common::FailingStore::default())).await;
    let server = make_server(state);

    let response = server.get("/dashboard").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Welcome back!"));
    assert!(!html.contains("stat-card"));
}
