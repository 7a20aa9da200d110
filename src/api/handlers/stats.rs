//! Handler for short URL statistics.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::url::UrlRecordResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current record for a short code, including click
/// statistics.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// Served through the same cache-first lookup as the redirect path, so
/// `clickCount` may lag the store by up to the cache TTL.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    let record = state
        .shortener
        .get_by_code(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": &code })))?;

    Ok(Json(UrlRecordResponse::from_record(&record, &state.base_url)))
}
