//! URL shortening orchestration service.

use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl, UrlStatus};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::generate_code;
use serde_json::json;
use tracing::{debug, error};

/// Maximum insert attempts before giving up on code generation.
///
/// Each attempt uses a fresh salt, so at 64^8 possible codes exhausting
/// this cap means something other than bad luck is wrong.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Orchestrates short URL creation, lookup and mutation over the
/// persistent store and the read-through cache.
///
/// The store is authoritative; the cache is an optimization keyed by
/// short code with a fixed TTL. Reads consult the cache first and
/// back-fill it on a miss. Mutations bypass the cache for their read,
/// apply atomically in the store, then write the fresh record through.
/// Cache failures are absorbed by the cache layer and degrade to store
/// round trips.
pub struct ShortenerService {
    repository: Arc<dyn UrlRepository>,
    cache: Arc<dyn CacheService>,
}

impl ShortenerService {
    /// Creates a new service over the given store and cache.
    pub fn new(repository: Arc<dyn UrlRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Shortens a URL, returning the existing record if the URL is
    /// already known.
    ///
    /// # Idempotency
    ///
    /// A URL is shortened at most once: a second request for the same
    /// `original_url` returns the first record unchanged. The existing
    /// record is also written to the cache so a following redirect hits.
    ///
    /// # Code Generation
    ///
    /// Derives a salted candidate code and attempts the insert; the
    /// store's unique index is the authority on collisions. On conflict
    /// the service first re-checks whether a concurrent request shortened
    /// the same URL (and returns that record), otherwise regenerates with
    /// a fresh salt. Gives up after [`MAX_GENERATION_ATTEMPTS`] attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors or attempt
    /// exhaustion.
    pub async fn shorten(&self, original_url: String) -> Result<ShortUrl, AppError> {
        if let Some(existing) = self.repository.find_by_original_url(&original_url).await? {
            self.write_through(&existing).await;
            return Ok(existing);
        }

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let new_url = NewShortUrl {
                original_url: original_url.clone(),
                short_code: generate_code(&original_url),
            };

            match self.repository.insert(new_url).await {
                Ok(record) => {
                    self.write_through(&record).await;
                    return Ok(record);
                }
                Err(AppError::Conflict { .. }) => {
                    // Either the candidate code collided or a concurrent
                    // request inserted the same URL first.
                    if let Some(existing) =
                        self.repository.find_by_original_url(&original_url).await?
                    {
                        self.write_through(&existing).await;
                        return Ok(existing);
                    }

                    debug!("Short code collision on attempt {}, regenerating", attempt);
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Looks up a record by short code, cache first.
    ///
    /// A cache hit is returned without a store read, accepting up to the
    /// TTL window of staleness for `click_count` and `status` in exchange
    /// for keeping the redirect hot path off the store. A miss falls
    /// through to the store and back-fills the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        match self.cache.get(short_code).await {
            Ok(Some(record)) => return Ok(Some(record)),
            Ok(None) => {}
            Err(e) => error!("Cache error for {}: {}", short_code, e),
        }

        let record = self.repository.find_by_code(short_code).await?;

        if let Some(ref record) = record {
            self.write_through(record).await;
        }

        Ok(record)
    }

    /// Counts a click on a record.
    ///
    /// The increment is applied store-side in one atomic statement, so it
    /// never reads through the cache and concurrent clicks never lose an
    /// update. The refreshed record is then written through.
    ///
    /// Returns `Ok(None)` when the code is unknown; nothing is mutated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn record_click(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        let updated = self.repository.increment_clicks(short_code).await?;

        if let Some(ref record) = updated {
            self.write_through(record).await;
        }

        Ok(updated)
    }

    /// Sets the lifecycle status of a record.
    ///
    /// Mutates store-first (bypassing the cache), then writes the updated
    /// record through. A stale `Active` entry may therefore survive in
    /// the cache only until this write lands or the TTL expires.
    ///
    /// Returns `Ok(None)` when the code is unknown; nothing is mutated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn update_status(
        &self,
        short_code: &str,
        status: UrlStatus,
    ) -> Result<Option<ShortUrl>, AppError> {
        let updated = self.repository.update_status(short_code, status).await?;

        if let Some(ref record) = updated {
            self.write_through(record).await;
        }

        Ok(updated)
    }

    /// Mirrors a record into the cache with the default TTL.
    ///
    /// Cache faults are logged and swallowed; the store write has already
    /// succeeded by the time this runs.
    async fn write_through(&self, record: &ShortUrl) {
        if let Err(e) = self.cache.set(record, None).await {
            error!("Failed to cache record {}: {}", record.short_code, e);
        }
    }
}
