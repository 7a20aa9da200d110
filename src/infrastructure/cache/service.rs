//! Cache service trait and error types.

use crate::domain::entities::ShortUrl;
use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching short URL records.
///
/// Entries are keyed by short code and hold the whole serialized record,
/// so a cache hit answers a lookup without touching the store. Absence is
/// a normal miss, not an error.
///
/// Implementations must be thread-safe and fail open: the store remains
/// the source of truth, so a cache outage may never fail a read or write
/// path. Errors are logged and reported as misses.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the cached record for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` on cache hit
    /// - `Ok(None)` on cache miss or error (fail-open behavior)
    async fn get(&self, short_code: &str) -> CacheResult<Option<ShortUrl>>;

    /// Stores a record in cache under its short code.
    ///
    /// # Arguments
    ///
    /// - `record` - The record to serialize and cache
    /// - `ttl_seconds` - Optional TTL override (implementation default if None)
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers. Implementations log errors
    /// and return `Ok(())` to avoid disrupting the request flow.
    async fn set(&self, record: &ShortUrl, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Removes a cached record.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers.
    async fn invalidate(&self, short_code: &str) -> CacheResult<()>;
}
