//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl, UrlStatus};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `short_urls` table.
///
/// The store is the single source of truth: short-code uniqueness is
/// enforced here by a unique index, not by the code generator, and all
/// mutations are single atomic statements.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new short URL row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code (or the original
    /// URL, when two creations race) is already taken; the caller is
    /// expected to regenerate the code and retry.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a record by its original URL.
    ///
    /// Used to return the existing mapping when the same URL is shortened
    /// again.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<ShortUrl>, AppError>;

    /// Atomically increments the click counter and stamps the click time.
    ///
    /// The increment happens store-side in a single `UPDATE`, so two
    /// concurrent clicks on the same code never lose an increment.
    ///
    /// Returns `Ok(None)` when the code is unknown; no row is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Sets the lifecycle status of a record.
    ///
    /// Returns `Ok(None)` when the code is unknown; no row is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_status(
        &self,
        short_code: &str,
        status: UrlStatus,
    ) -> Result<Option<ShortUrl>, AppError>;

    /// Verifies store connectivity with a trivial query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
