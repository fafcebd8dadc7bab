//! Repository trait for skills.

use crate::domain::entities::{NewSkill, Skill};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create(&self, new_skill: NewSkill) -> Result<Skill, AppError>;

    /// Lists skills ordered by category, then name.
    async fn list(&self) -> Result<Vec<Skill>, AppError>;

    /// Returns `Ok(false)` if no row matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
