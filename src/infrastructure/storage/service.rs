//! Object storage trait and error types.

use async_trait::async_trait;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    #[error("Object already exists: {0}")]
    AlreadyExists(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Stores uploaded images and hands back the URL visitors load them from.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::LocalStorage`] - Files on local disk served under a public path
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Writes `bytes` under `key` and returns the object's public URL.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AlreadyExists`] if the key is taken, or
    /// [`StorageError::Io`] if the write fails.
    async fn upload(&self, key: &str, bytes: &[u8]) -> StorageResult<String>;

    /// Removes the object behind a public URL previously returned by
    /// [`ObjectStorage::upload`]. Unknown URLs are ignored.
    async fn delete_by_url(&self, public_url: &str) -> StorageResult<()>;

    /// Checks that the backend accepts writes.
    async fn health_check(&self) -> bool;
}
