//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`        - Create (or return) a short URL
//! - `GET  /stats/{code}`   - Record projection with click statistics
//! - `GET  /{code}`         - Redirect to the original URL
//! - `PUT  /{code}/status`  - Change lifecycle status
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    redirect_handler, shorten_handler, stats_handler, update_status_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post, put};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .route("/{code}/status", put(update_status_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
