#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use linklet::application::services::ShortenerService;
use linklet::domain::entities::{NewShortUrl, ShortUrl, UrlStatus};
use linklet::domain::repositories::UrlRepository;
use linklet::error::AppError;
use linklet::infrastructure::cache::{CacheResult, CacheService};
use linklet::state::AppState;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// Store double backed by a map, with the same uniqueness and atomicity
/// contract as the Postgres repository.
///
/// `set_offline(true)` makes every operation fail, which lets tests prove
/// that a given read was served entirely from the cache.
pub struct InMemoryUrlRepository {
    rows: Mutex<HashMap<String, ShortUrl>>,
    next_id: AtomicI64,
    offline: AtomicBool,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            offline: AtomicBool::new(false),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get_row(&self, short_code: &str) -> Option<ShortUrl> {
        self.rows.lock().unwrap().get(short_code).cloned()
    }

    /// Test setup helper: flips a row's status without going through the
    /// service (and therefore without touching the cache).
    pub fn update_status_sync(&self, short_code: &str, status: UrlStatus) {
        if let Some(record) = self.rows.lock().unwrap().get_mut(short_code) {
            record.status = status;
        }
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

impl Default for InMemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        self.check_online()?;

        let mut rows = self.rows.lock().unwrap();

        if rows.contains_key(&new_url.short_code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "short_urls_short_code_key" }),
            ));
        }
        if rows.values().any(|r| r.original_url == new_url.original_url) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "short_urls_original_url_key" }),
            ));
        }

        let record = ShortUrl {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            original_url: new_url.original_url,
            short_code: new_url.short_code.clone(),
            created_at: Utc::now(),
            click_count: 0,
            last_clicked_at: None,
            status: UrlStatus::Active,
        };

        rows.insert(new_url.short_code, record.clone());
        Ok(record)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        self.check_online()?;
        Ok(self.rows.lock().unwrap().get(short_code).cloned())
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError> {
        self.check_online()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|r| r.original_url == original_url)
            .cloned())
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        self.check_online()?;

        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(short_code).map(|record| {
            record.click_count += 1;
            record.last_clicked_at = Some(Utc::now());
            record.clone()
        }))
    }

    async fn update_status(
        &self,
        short_code: &str,
        status: UrlStatus,
    ) -> Result<Option<ShortUrl>, AppError> {
        self.check_online()?;

        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(short_code).map(|record| {
            record.status = status;
            record.clone()
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_online()
    }
}

/// Map-backed cache double. TTLs are accepted and ignored.
#[derive(Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, ShortUrl>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, short_code: &str) -> bool {
        self.entries.lock().unwrap().contains_key(short_code)
    }

    pub fn peek(&self, short_code: &str) -> Option<ShortUrl> {
        self.entries.lock().unwrap().get(short_code).cloned()
    }

    /// Drops an entry, standing in for TTL expiry.
    pub fn evict(&self, short_code: &str) {
        self.entries.lock().unwrap().remove(short_code);
    }
}

#[async_trait]
impl CacheService for InMemoryCache {
    async fn get(&self, short_code: &str) -> CacheResult<Option<ShortUrl>> {
        Ok(self.entries.lock().unwrap().get(short_code).cloned())
    }

    async fn set(&self, record: &ShortUrl, _ttl: Option<u64>) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(record.short_code.clone(), record.clone());
        Ok(())
    }

    async fn invalidate(&self, short_code: &str) -> CacheResult<()> {
        self.entries.lock().unwrap().remove(short_code);
        Ok(())
    }
}

/// Builds handler-ready state over in-memory store and cache doubles,
/// returning both doubles for direct inspection.
pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>, Arc<InMemoryCache>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let cache = Arc::new(InMemoryCache::new());

    let shortener = Arc::new(ShortenerService::new(repository.clone(), cache.clone()));
    let state = AppState::new(shortener, TEST_BASE_URL.to_string());

    (state, repository, cache)
}
