//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;

/// Redirects a short code to its original URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Reject codes that fail the 8-character format check
/// 2. Look up the record (cache first, store on miss)
/// 3. Reject records whose status is not `Active`
/// 4. Count the click (atomic store-side increment, cache refreshed)
/// 5. Return 302 Found with the original URL in `Location`
///
/// A cache hit may serve a record whose status was just flipped; the
/// stale window is bounded by the write-through on mutation and the
/// entry TTL.
///
/// # Errors
///
/// Returns 400 Bad Request for malformed codes and non-active links.
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    if !is_valid_code(&code) {
        return Err(AppError::bad_request(
            "Invalid short code format",
            json!({ "code": code }),
        ));
    }

    let record = state
        .shortener
        .get_by_code(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": &code })))?;

    if !record.is_active() {
        return Err(AppError::bad_request(
            format!(
                "This URL is in {} status and no longer active.",
                record.status
            ),
            json!({ "code": &code, "status": record.status.to_string() }),
        ));
    }

    state.shortener.record_click(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, record.original_url)]))
}
