//! Business logic services for the application layer.

pub mod auth_service;
pub mod content_service;
pub mod dashboard_service;
pub mod profile_service;
pub mod project_service;
pub mod short_link_service;

pub use auth_service::AuthService;
pub use content_service::ContentService;
pub use dashboard_service::DashboardService;
pub use profile_service::ProfileService;
pub use project_service::ProjectService;
pub use short_link_service::ShortLinkService;
