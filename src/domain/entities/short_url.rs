//! Short URL entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a shortened URL.
///
/// Only `Active` links may be followed by the redirect endpoint. `Expired`
/// is set explicitly through the status update endpoint; there is no
/// background sweeper that flips links to `Expired` on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrlStatus {
    Active,
    Inactive,
    Expired,
}

impl UrlStatus {
    /// Lowercase form used in the `short_urls.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for UrlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Expired => "Expired",
        };
        f.write_str(name)
    }
}

impl FromStr for UrlStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "expired" => Ok(Self::Expired),
            other => Err(format!("unknown url status '{}'", other)),
        }
    }
}

/// A shortened URL with click statistics.
///
/// Represents one row of the `short_urls` table. `original_url`,
/// `short_code` and `created_at` are immutable after creation; the click
/// fields and `status` change through the service's mutation operations.
///
/// The entity is serde-serializable because cache entries store the whole
/// record as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortUrl {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub status: UrlStatus,
}

impl ShortUrl {
    /// Returns true if the link may be followed by a redirect.
    pub fn is_active(&self) -> bool {
        self.status == UrlStatus::Active
    }
}

/// Input data for creating a new short URL.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub original_url: String,
    pub short_code: String,
}
