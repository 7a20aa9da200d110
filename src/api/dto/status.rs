//! DTO for the status update endpoint.

use crate::domain::entities::UrlStatus;
use serde::Deserialize;

/// Request to change a short URL's lifecycle status.
///
/// `status` takes the variant name: `"Active"`, `"Inactive"` or
/// `"Expired"`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: UrlStatus,
}
