//! Repository trait for social profile links.

use crate::domain::entities::{NewSocialLink, SocialLink};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialLinkRepository: Send + Sync {
    async fn create(&self, new_link: NewSocialLink) -> Result<SocialLink, AppError>;

    /// Lists links in insertion order.
    async fn list(&self) -> Result<Vec<SocialLink>, AppError>;

    /// Returns `Ok(false)` if no row matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
