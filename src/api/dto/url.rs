//! API projection of a short URL record.

use crate::domain::entities::ShortUrl;
use serde::Serialize;

/// Timestamp format used by all record projections.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// JSON projection of a [`ShortUrl`] returned by the shorten, stats and
/// status endpoints.
///
/// Timestamps are rendered as `yyyy-MM-dd HH:mm:ss` in UTC;
/// `lastClickedAt` is `null` until the first redirect.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecordResponse {
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
    pub created_at: String,
    pub click_count: i64,
    pub last_clicked_at: Option<String>,
    pub status: String,
}

impl UrlRecordResponse {
    /// Builds the projection, deriving `short_url` from the configured
    /// base URL.
    pub fn from_record(record: &ShortUrl, base_url: &str) -> Self {
        Self {
            original_url: record.original_url.clone(),
            short_url: format!("{}/{}", base_url.trim_end_matches('/'), record.short_code),
            short_code: record.short_code.clone(),
            created_at: record.created_at.format(TIMESTAMP_FORMAT).to_string(),
            click_count: record.click_count,
            last_clicked_at: record
                .last_clicked_at
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
            status: record.status.to_string(),
        }
    }
}
