//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence concerns.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A slug mapped to a destination URL with a click counter
//! - [`Project`], [`Skill`], [`Experience`], [`SocialLink`] - Portfolio content
//! - [`About`], [`SeoSettings`] - Singleton records
//! - [`AdminUser`], [`Session`] - Dashboard authentication
//!
//! # Design Pattern
//!
//! Separate structs are used for creation and updates:
//! - `NewShortLink`, `NewProject`, `NewSkill`, ... - For creating new records
//! - `ProjectPatch`, `AboutUpdate`, `SeoUpdate` - For updates

pub mod experience;
pub mod profile;
pub mod project;
pub mod session;
pub mod short_link;
pub mod skill;
pub mod social_link;
pub mod upload;
pub mod user;

pub use experience::{Experience, NewExperience};
pub use profile::{About, AboutUpdate, SeoSettings, SeoUpdate, TwitterCard};
pub use project::{NewProject, Project, ProjectPatch};
pub use session::{NewSession, Session};
pub use short_link::{NewShortLink, ShortLink};
pub use skill::{NewSkill, Skill, SkillCategory, SkillLevel};
pub use social_link::{Icon, NewSocialLink, Platform, SocialLink};
pub use upload::{ImageFormat, UploadedFile};
pub use user::AdminUser;
