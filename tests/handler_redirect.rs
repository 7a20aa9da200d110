mod common;

use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use linklet::api::handlers::{redirect_handler, shorten_handler};
use serde_json::json;

fn redirect_app(state: linklet::AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server.post("/shorten").json(&json!({ "url": url })).await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()["shortCode"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_redirect_points_to_original_url_and_counts_click() {
    let (state, repo, _cache) = common::create_test_state();
    let server = TestServer::new(redirect_app(state)).unwrap();

    let code = shorten(&server, "https://example.com/very/long/path").await;

    let response = server.get(&format!("/{}", code)).await;
    response.assert_status(StatusCode::FOUND);

    let location = response.headers().get("location").unwrap();
    assert_eq!(location, "https://example.com/very/long/path");

    let row = repo.get_row(&code).unwrap();
    assert_eq!(row.click_count, 1);
    assert!(row.last_clicked_at.is_some());
}

#[tokio::test]
async fn test_sequential_redirects_accumulate_clicks() {
    let (state, repo, _cache) = common::create_test_state();
    let server = TestServer::new(redirect_app(state)).unwrap();

    let code = shorten(&server, "https://example.com").await;

    for _ in 0..5 {
        let response = server.get(&format!("/{}", code)).await;
        response.assert_status(StatusCode::FOUND);
    }

    let row = repo.get_row(&code).unwrap();
    assert_eq!(row.click_count, 5);
    // The stamp must come from the last increment.
    assert!(row.last_clicked_at.unwrap() >= row.created_at);
}

#[tokio::test]
async fn test_redirect_unknown_code_returns_404() {
    let (state, _repo, _cache) = common::create_test_state();
    let server = TestServer::new(redirect_app(state)).unwrap();

    let response = server.get("/unknown0").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_rejects_malformed_code() {
    let (state, _repo, _cache) = common::create_test_state();
    let server = TestServer::new(redirect_app(state)).unwrap();

    // Wrong length and characters outside the URL-safe alphabet.
    for bad in ["short", "waytoolongcode", "bad+code"] {
        let response = server.get(&format!("/{}", bad)).await;
        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn test_redirect_fills_cache_on_miss_and_hits_afterwards() {
    let (state, repo, cache) = common::create_test_state();
    let shortener = state.shortener.clone();
    let server = TestServer::new(redirect_app(state)).unwrap();

    let code = shorten(&server, "https://example.com/cached").await;

    // Simulate TTL expiry, then let one lookup repopulate the entry.
    cache.evict(&code);
    assert!(!cache.contains(&code));

    let response = server.get(&format!("/{}", code)).await;
    response.assert_status(StatusCode::FOUND);
    assert!(cache.contains(&code));

    // With the store down, only a cache hit can answer.
    repo.set_offline(true);
    let record = shortener.get_by_code(&code).await.unwrap().unwrap();
    assert_eq!(record.original_url, "https://example.com/cached");
}

#[tokio::test]
async fn test_redirect_denied_for_inactive_link() {
    let (state, repo, cache) = common::create_test_state();
    let server = TestServer::new(redirect_app(state)).unwrap();

    let code = shorten(&server, "https://example.com/disabled").await;

    // Flip the row in the store and drop the cached copy so the handler
    // observes the new status.
    repo.update_status_sync(&code, linklet::prelude::UrlStatus::Inactive);
    cache.evict(&code);

    let response = server.get(&format!("/{}", code)).await;
    response.assert_status_bad_request();

    // The denied attempt must not count a click.
    assert_eq!(repo.get_row(&code).unwrap().click_count, 0);
}

#[tokio::test]
async fn test_redirect_denied_for_expired_link() {
    let (state, repo, cache) = common::create_test_state();
    let server = TestServer::new(redirect_app(state)).unwrap();

    let code = shorten(&server, "https://example.com/old").await;

    repo.update_status_sync(&code, linklet::prelude::UrlStatus::Expired);
    cache.evict(&code);

    let response = server.get(&format!("/{}", code)).await;
    response.assert_status_bad_request();
}
