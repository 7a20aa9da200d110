//! Inbound URL validation.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Validates that `input` is an absolute HTTP or HTTPS URL.
///
/// Rejects relative references and potentially dangerous schemes like
/// `javascript:`, `data:` and `file:` before they ever reach the store.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for malformed URLs or non-HTTP(S)
/// schemes.
pub fn validate_http_url(input: &str) -> Result<(), AppError> {
    let url = Url::parse(input)
        .map_err(|e| AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() })))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::bad_request(
            "Only HTTP and HTTPS URLs can be shortened",
            json!({ "scheme": other }),
        )),
    }
}
