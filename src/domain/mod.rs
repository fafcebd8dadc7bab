//! Domain layer containing business entities and rules.
//!
//! This module implements the core domain logic following Clean Architecture principles.
//! It defines entities, repository interfaces, and the route protection rules
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`gate`] - Which paths need a session and where visitors are sent
//! - [`session_sweeper`] - Background removal of expired sessions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Redirect Flow
//!
//! 1. HTTP handler receives `GET /{slug}`
//! 2. [`crate::application::services::ShortLinkService`] resolves the slug
//! 3. [`repositories::ShortLinkRepository::record_click`] increments the
//!    counter and returns the destination in one statement

pub mod entities;
pub mod gate;
pub mod repositories;
pub mod session_sweeper;
