//! DTO for the shorten endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}
