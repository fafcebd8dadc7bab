//! Public service endpoints outside the HTML pages.
//!
//! # Modules
//!
//! - [`dto`] - JSON response bodies
//! - [`handlers`] - Slug redirects and health checks
//! - [`middleware`] - Rate limiting and request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
