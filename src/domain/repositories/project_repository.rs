//! Repository trait for portfolio projects.

use crate::domain::entities::{NewProject, Project, ProjectPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing projects.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProjectRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Inserts a project.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_project: NewProject) -> Result<Project, AppError>;

    /// Lists projects, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Project>, AppError>;

    /// Applies `patch` to the project with `id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Project))` with the updated row
    /// - `Ok(None)` if no project has this id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: ProjectPatch) -> Result<Option<Project>, AppError>;

    /// Deletes a project. Returns `Ok(false)` if no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts all projects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
