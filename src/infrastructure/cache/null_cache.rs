//! No-op cache implementation for testing or disabled caching.

use super::service::{CacheResult, CacheService};
use crate::domain::entities::ShortUrl;
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when Redis is unavailable or caching is explicitly disabled.
/// All operations succeed immediately without storing or retrieving data,
/// so every read falls through to the store.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _short_code: &str) -> CacheResult<Option<ShortUrl>> {
        Ok(None)
    }

    async fn set(&self, _record: &ShortUrl, _ttl: Option<u64>) -> CacheResult<()> {
        Ok(())
    }

    async fn invalidate(&self, _short_code: &str) -> CacheResult<()> {
        Ok(())
    }
}
