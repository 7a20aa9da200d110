//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::ShortenRequest;
use crate::api::dto::url::UrlRecordResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::validate_http_url;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long/path" }
/// ```
///
/// # Idempotency
///
/// Shortening a URL that is already known returns the original record
/// with its existing code; no second row is created.
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is malformed or not HTTP(S).
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    payload.validate()?;
    validate_http_url(&payload.url)?;

    let record = state.shortener.shorten(payload.url).await?;

    Ok(Json(UrlRecordResponse::from_record(&record, &state.base_url)))
}
