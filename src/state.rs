//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;

/// Handler-visible application state.
///
/// Dependencies are constructed once at startup (see
/// [`crate::server::run`]) and injected here; handlers never reach for
/// ambient connections.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    /// Public base URL used to build `shortUrl` projections.
    pub base_url: String,
}

impl AppState {
    /// Creates application state from constructed dependencies.
    pub fn new(shortener: Arc<ShortenerService>, base_url: String) -> Self {
        Self {
            shortener,
            base_url,
        }
    }
}
