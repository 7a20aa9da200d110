//! REST API layer: handlers, DTOs, and middleware.
//!
//! The API layer is a thin boundary over
//! [`crate::application::services::ShortenerService`]: it validates
//! input, translates absent results to 404 responses, and shapes record
//! projections.

pub mod dto;
pub mod handlers;
pub mod middleware;
