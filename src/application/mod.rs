//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! and cache calls under the consistency rules the HTTP boundary relies
//! on.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Short URL
//!   creation, lookup, click accounting and status updates

pub mod services;
