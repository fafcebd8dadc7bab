//! Repository trait for administrators and their sessions.

use crate::domain::entities::{AdminUser, NewSession, Session};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface backing dashboard authentication.
///
/// Sessions are looked up by the keyed hash of the cookie token; raw tokens
/// are never stored.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAuthRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_auth.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Finds an administrator by (lowercased) email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AdminUser>, AppError>;

    /// Creates an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<AdminUser, AppError>;

    /// Lists all administrators.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_users(&self) -> Result<Vec<AdminUser>, AppError>;

    /// Replaces a password hash. Returns `Ok(false)` if the email is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_password(&self, email: &str, password_hash: &str) -> Result<bool, AppError>;

    /// Deletes an administrator and, through the foreign key, their sessions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_user(&self, email: &str) -> Result<bool, AppError>;

    /// Persists a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_session(&self, new_session: NewSession) -> Result<(), AppError>;

    /// Finds an unexpired session by token hash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_session(&self, token_hash: &str) -> Result<Option<Session>, AppError>;

    /// Moves the expiry of a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn extend_session(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError>;

    /// Deletes a session. Returns `Ok(false)` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_session(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Deletes every expired session and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_expired_sessions(&self) -> Result<u64, AppError>;
}
