//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ShortLinkRepository`] - Short links and click counting
//! - [`ProjectRepository`] - Portfolio projects
//! - [`SkillRepository`], [`ExperienceRepository`], [`SocialLinkRepository`] - Portfolio content
//! - [`ProfileRepository`] - About and SEO singletons
//! - [`AuthRepository`] - Administrators and sessions
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod auth_repository;
pub mod experience_repository;
pub mod profile_repository;
pub mod project_repository;
pub mod short_link_repository;
pub mod skill_repository;
pub mod social_link_repository;

pub use auth_repository::AuthRepository;
pub use experience_repository::ExperienceRepository;
pub use profile_repository::ProfileRepository;
pub use project_repository::ProjectRepository;
pub use short_link_repository::ShortLinkRepository;
pub use skill_repository::SkillRepository;
pub use social_link_repository::SocialLinkRepository;

#[cfg(test)]
pub use auth_repository::MockAuthRepository;
#[cfg(test)]
pub use experience_repository::MockExperienceRepository;
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
#[cfg(test)]
pub use project_repository::MockProjectRepository;
#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
#[cfg(test)]
pub use skill_repository::MockSkillRepository;
#[cfg(test)]
pub use social_link_repository::MockSocialLinkRepository;
