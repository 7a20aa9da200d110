//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! input uses a separate `NewShortUrl` struct so the store can assign the
//! surrogate id and timestamps.

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl, UrlStatus};
