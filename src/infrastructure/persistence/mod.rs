//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters and `FromRow` row types.
//!
//! # Repositories
//!
//! - [`PgShortLinkRepository`] - Short links and click counters
//! - [`PgProjectRepository`] - Portfolio projects
//! - [`PgSkillRepository`], [`PgExperienceRepository`], [`PgSocialLinkRepository`] - Portfolio content
//! - [`PgProfileRepository`] - About and SEO singletons
//! - [`PgAuthRepository`] - Admin users and sessions

pub mod pg_auth_repository;
pub mod pg_experience_repository;
pub mod pg_profile_repository;
pub mod pg_project_repository;
pub mod pg_short_link_repository;
pub mod pg_skill_repository;
pub mod pg_social_link_repository;

pub use pg_auth_repository::PgAuthRepository;
pub use pg_experience_repository::PgExperienceRepository;
pub use pg_profile_repository::PgProfileRepository;
pub use pg_project_repository::PgProjectRepository;
pub use pg_short_link_repository::PgShortLinkRepository;
pub use pg_skill_repository::PgSkillRepository;
pub use pg_social_link_repository::PgSocialLinkRepository;
