//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::entities::ShortUrl;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache implementation for fast short URL lookups.
///
/// Uses connection pooling via `ConnectionManager` for efficient
/// connection reuse. Records are stored as JSON strings under
/// `url:<short_code>` keys. All operations are fail-open: errors are
/// logged but don't propagate to callers.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set`] is called
    ///   with `ttl_seconds = None`; controlled via `CACHE_TTL_SECONDS` env var
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "url:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, short_code: &str) -> String {
        format!("{}{}", self.key_prefix, short_code)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, short_code: &str) -> CacheResult<Option<ShortUrl>> {
        let key = self.build_key(short_code);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(payload)) => match serde_json::from_str::<ShortUrl>(&payload) {
                Ok(record) => {
                    debug!("Cache HIT: {}", short_code);
                    Ok(Some(record))
                }
                Err(e) => {
                    // A corrupt entry is treated as a miss; the store read
                    // that follows will overwrite it.
                    warn!("Cache entry for {} is not deserializable: {}", short_code, e);
                    Ok(None)
                }
            },
            Ok(None) => {
                debug!("Cache MISS: {}", short_code);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", short_code, e);
                Ok(None)
            }
        }
    }

    async fn set(&self, record: &ShortUrl, ttl: Option<u64>) -> CacheResult<()> {
        let key = self.build_key(&record.short_code);
        let mut conn = self.client.clone();
        let ttl_seconds = ttl.unwrap_or(self.default_ttl);

        let payload = match serde_json::to_string(record) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to serialize record {}: {}", record.short_code, e);
                return Ok(());
            }
        };

        match conn.set_ex::<_, _, ()>(&key, payload, ttl_seconds).await {
            Ok(_) => {
                debug!("Cache SET: {} (TTL: {}s)", record.short_code, ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", record.short_code, e);
                Ok(())
            }
        }
    }

    async fn invalidate(&self, short_code: &str) -> CacheResult<()> {
        let key = self.build_key(short_code);
        let mut conn = self.client.clone();

        match conn.del::<_, i32>(&key).await {
            Ok(deleted) => {
                if deleted > 0 {
                    debug!("Cache INVALIDATE: {}", short_code);
                }
                Ok(())
            }
            Err(e) => {
                warn!("Redis DEL error for {}: {}", short_code, e);
                Ok(())
            }
        }
    }
}
