//! Repository trait for work experience entries.

use crate::domain::entities::{Experience, NewExperience};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create(&self, new_experience: NewExperience) -> Result<Experience, AppError>;

    /// Lists entries with the most recent start date first.
    async fn list(&self) -> Result<Vec<Experience>, AppError>;

    /// Returns `Ok(false)` if no row matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
