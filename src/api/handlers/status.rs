//! Handler for short URL status updates.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::status::UpdateStatusRequest;
use crate::api::dto::url::UrlRecordResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Sets the lifecycle status of a short URL.
///
/// # Endpoint
///
/// `PUT /{code}/status`
///
/// # Request Body
///
/// ```json
/// { "status": "Inactive" }
/// ```
///
/// The store is updated first, then the cache entry is overwritten, so
/// a deactivated link stops redirecting as soon as the write-through
/// lands.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn update_status_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    let record = state
        .shortener
        .update_status(&code, payload.status)
        .await?
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": &code })))?;

    Ok(Json(UrlRecordResponse::from_record(&record, &state.base_url)))
}
