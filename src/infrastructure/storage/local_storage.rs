//! Filesystem-backed object storage.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::service::{ObjectStorage, StorageError, StorageResult};

/// Stores objects as files in one directory, served by the web layer under
/// `public_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
    public_path: String,
}

impl LocalStorage {
    /// Creates the storage, making sure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub async fn new(root: impl Into<PathBuf>, public_path: &str) -> StorageResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;

        tracing::info!(root = %root.display(), public_path, "Local storage ready");

        Ok(Self {
            root,
            public_path: public_path.trim_end_matches('/').to_string(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_path, key)
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        if !is_safe_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }

    fn key_from_url<'a>(&self, public_url: &'a str) -> Option<&'a str> {
        public_url
            .strip_prefix(self.public_path.as_str())?
            .strip_prefix('/')
            .filter(|key| is_safe_key(key))
    }
}

/// Keys are single file names: no separators, no parent references.
fn is_safe_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Writes `bytes` to a freshly created file, removing the file if the write
/// fails so no truncated object is left behind.
async fn write_or_remove<W>(mut writer: W, path: &Path, bytes: &[u8]) -> StorageResult<()>
where
    W: AsyncWrite + Unpin,
{
    let written = async {
        writer.write_all(bytes).await?;
        writer.flush().await
    }
    .await;

    if let Err(e) = written {
        drop(writer);
        if let Err(cleanup) = tokio::fs::remove_file(path).await {
            tracing::warn!(error = %cleanup, path = %path.display(), "Failed to remove partial object");
        }
        return Err(e.into());
    }

    Ok(())
}

#[async_trait]
impl ObjectStorage for LocalStorage {
    async fn upload(&self, key: &str, bytes: &[u8]) -> StorageResult<String> {
        let path = self.path_for(key)?;

        let file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => StorageError::AlreadyExists(key.to_string()),
                _ => StorageError::Io(e),
            })?;

        write_or_remove(file, &path, bytes).await?;

        tracing::debug!(key, size = bytes.len(), "Object stored");
        Ok(self.public_url(key))
    }

    async fn delete_by_url(&self, public_url: &str) -> StorageResult<()> {
        let Some(key) = self.key_from_url(public_url) else {
            tracing::debug!(public_url, "Not a local object, skipping delete");
            return Ok(());
        };

        match tokio::fs::remove_file(self.root.join(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn health_check(&self) -> bool {
        match tokio::fs::metadata(&self.root).await {
            Ok(meta) => meta.is_dir() && !meta.permissions().readonly(),
            Err(e) => {
                tracing::warn!(error = %e, "Storage health check failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("portfolio-storage-{}-{}", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_upload_and_delete() {
        let root = temp_root("roundtrip");
        let storage = LocalStorage::new(&root, "/uploads/").await.unwrap();

        let url = storage.upload("abc.png", b"png-bytes").await.unwrap();
        assert_eq!(url, "/uploads/abc.png");
        assert_eq!(tokio::fs::read(root.join("abc.png")).await.unwrap(), b"png-bytes");

        storage.delete_by_url(&url).await.unwrap();
        assert!(!root.join("abc.png").exists());

        // Deleting twice is fine
        storage.delete_by_url(&url).await.unwrap();
        let _ = tokio::fs::remove_dir_all(&root).await;
    }

    #[tokio::test]
    async fn test_upload_does_not_overwrite() {
        let root = temp_root("overwrite");
        let storage = LocalStorage::new(&root, "/uploads").await.unwrap();

        storage.upload("same.jpg", b"first").await.unwrap();
        let err = storage.upload("same.jpg", b"second").await.unwrap_err();

        assert!(matches!(err, StorageError::AlreadyExists(_)));
        assert_eq!(tokio::fs::read(root.join("same.jpg")).await.unwrap(), b"first");
        let _ = tokio::fs::remove_dir_all(&root).await;
    }

    #[tokio::test]
    async fn test_failed_write_removes_partial_file() {
        let root = temp_root("partial");
        tokio::fs::create_dir_all(&root).await.unwrap();
        let path = root.join("half.png");
        tokio::fs::write(&path, b"\x89PN").await.unwrap();

        // Writing to a duplex stream whose reader is gone fails with BrokenPipe
        let (writer, reader) = tokio::io::duplex(4);
        drop(reader);

        let err = write_or_remove(writer, &path, b"\x89PNG\r\n\x1a\n")
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Io(_)));
        assert!(!path.exists());
        let _ = tokio::fs::remove_dir_all(&root).await;
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let root = temp_root("traversal");
        let storage = LocalStorage::new(&root, "/uploads").await.unwrap();

        assert!(matches!(
            storage.upload("../escape.png", b"x").await,
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            storage.upload(".hidden", b"x").await,
            Err(StorageError::InvalidKey(_))
        ));
        let _ = tokio::fs::remove_dir_all(&root).await;
    }

    #[tokio::test]
    async fn test_foreign_urls_are_ignored() {
        let root = temp_root("foreign");
        let storage = LocalStorage::new(&root, "/uploads").await.unwrap();

        storage
            .delete_by_url("https://cdn.example.com/pic.png")
            .await
            .unwrap();
        assert!(storage.health_check().await);
        let _ = tokio::fs::remove_dir_all(&root).await;
    }
}
