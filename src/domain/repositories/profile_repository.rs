//! Repository trait for the singleton About and SEO records.

use crate::domain::entities::{About, AboutUpdate, SeoSettings, SeoUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for singleton tables.
///
/// Writes are upserts keyed by a fixed identifier and run as one statement, so
/// the table never passes through an empty state.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProfileRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_profile.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Returns the About record, if one was ever saved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_about(&self) -> Result<Option<About>, AppError>;

    /// Inserts or replaces the About record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert_about(&self, update: AboutUpdate) -> Result<About, AppError>;

    /// Returns the SEO settings, if any were saved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_seo(&self) -> Result<Option<SeoSettings>, AppError>;

    /// Inserts or replaces the SEO settings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert_seo(&self, update: SeoUpdate) -> Result<SeoSettings, AppError>;
}
