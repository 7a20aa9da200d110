mod common;

use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use linklet::api::handlers::{redirect_handler, shorten_handler, stats_handler};
use serde_json::json;

fn stats_app(state: linklet::AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_stats_returns_record_projection() {
    let (state, _repo, _cache) = common::create_test_state();
    let server = TestServer::new(stats_app(state)).unwrap();

    let created = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/tracked" }))
        .await;
    created.assert_status_ok();
    let code = created.json::<serde_json::Value>()["shortCode"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/stats/{}", code)).await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["shortCode"], code.as_str());
    assert_eq!(body["originalUrl"], "https://example.com/tracked");
    assert_eq!(body["clickCount"], 0);
    assert!(body["lastClickedAt"].is_null());
    assert_eq!(body["status"], "Active");
}

#[tokio::test]
async fn test_stats_reflects_clicks_after_redirect() {
    let (state, _repo, _cache) = common::create_test_state();
    let server = TestServer::new(stats_app(state)).unwrap();

    let created = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/clicked" }))
        .await;
    let code = created.json::<serde_json::Value>()["shortCode"]
        .as_str()
        .unwrap()
        .to_string();

    let redirect = server.get(&format!("/{}", code)).await;
    redirect.assert_status(StatusCode::FOUND);

    // The write-through on the click keeps the cached stats fresh.
    let response = server.get(&format!("/stats/{}", code)).await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["clickCount"], 1);
    assert!(body["lastClickedAt"].is_string());
}

#[tokio::test]
async fn test_stats_unknown_code_returns_404() {
    let (state, _repo, _cache) = common::create_test_state();
    let server = TestServer::new(stats_app(state)).unwrap();

    let response = server.get("/stats/missing0").await;
    response.assert_status_not_found();
}
