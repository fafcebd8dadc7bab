//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::short_link_service::ShortLinkService`] - Short links and slug resolution
//! - [`services::project_service::ProjectService`] - Projects and their images
//! - [`services::content_service::ContentService`] - Skills, experience, social links
//! - [`services::profile_service::ProfileService`] - About and SEO singletons
//! - [`services::auth_service::AuthService`] - Admin login and sessions
//! - [`services::dashboard_service::DashboardService`] - Overview statistics

pub mod services;
