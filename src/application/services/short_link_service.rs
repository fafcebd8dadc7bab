//! Short link management and slug resolution.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::slug::{normalize_slug, validate_slug};
use crate::utils::url_validator::validate_web_url;
use serde_json::json;

/// Service for creating short links and resolving them to destinations.
pub struct ShortLinkService<R: ShortLinkRepository> {
    repository: Arc<R>,
}

impl<R: ShortLinkRepository> ShortLinkService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short link from dashboard form input.
    ///
    /// The slug is trimmed and lowercased before validation, so `" ABC "` and
    /// `"abc"` are the same slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either field is blank, the slug is
    /// malformed or reserved, or the URL is not an absolute HTTP(S) URL.
    ///
    /// Returns [`AppError::Conflict`] if the slug already exists.
    pub async fn create(&self, slug: &str, url: &str) -> Result<ShortLink, AppError> {
        if slug.trim().is_empty() || url.trim().is_empty() {
            return Err(AppError::bad_request(
                "Slug and URL are required",
                json!({ "fields": ["slug", "url"] }),
            ));
        }

        let slug = normalize_slug(slug);
        validate_slug(&slug)?;

        let original_url = validate_web_url(url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "url": url }))
        })?;

        let new_link = NewShortLink {
            slug: slug.clone(),
            original_url,
        };

        self.repository
            .create(new_link)
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::conflict(
                    "This slug already exists",
                    json!({ "slug": slug }),
                ),
                other => other,
            })
    }

    /// Resolves a slug to its destination and counts the click.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the slug exists (its counter is now one higher)
    /// - `Ok(None)` if the slug is empty or unknown
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, slug: &str) -> Result<Option<String>, AppError> {
        if slug.is_empty() {
            return Ok(None);
        }

        self.repository.record_click(slug).await
    }

    /// Lists all short links, newest first.
    pub async fn list(&self) -> Result<Vec<ShortLink>, AppError> {
        self.repository.list().await
    }

    /// Deletes a short link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "id": id }),
            ));
        }

        tracing::info!(id, "Short link deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockShortLinkRepository;
    use chrono::Utc;

    fn link(slug: &str, url: &str, clicks: i64) -> ShortLink {
        ShortLink {
            id: 1,
            slug: slug.to_string(),
            original_url: url.to_string(),
            clicks,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_slug() {
        let mut mock_repo = MockShortLinkRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_link| {
                new_link.slug == "promo" && new_link.original_url == "https://example.com/sale"
            })
            .times(1)
            .returning(|n| Ok(link(&n.slug, &n.original_url, 0)));

        let service = ShortLinkService::new(Arc::new(mock_repo));
        let created = service
            .create("  PROMO ", " https://example.com/sale ")
            .await
            .unwrap();

        assert_eq!(created.slug, "promo");
        assert_eq!(created.clicks, 0);
    }

    #[tokio::test]
    async fn test_create_requires_both_fields() {
        let mut mock_repo = MockShortLinkRepository::new();
        mock_repo.expect_create().times(0);

        let service = ShortLinkService::new(Arc::new(mock_repo));

        for (slug, url) in [("", "https://example.com"), ("abc", "   "), ("", "")] {
            let err = service.create(slug, url).await.unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }));
            assert_eq!(err.to_string(), "Slug and URL are required");
        }
    }

    #[tokio::test]
    async fn test_create_rejects_reserved_and_bad_urls() {
        let mut mock_repo = MockShortLinkRepository::new();
        mock_repo.expect_create().times(0);

        let service = ShortLinkService::new(Arc::new(mock_repo));

        assert!(service.create("dashboard", "https://example.com").await.is_err());
        assert!(service.create("ok", "javascript:alert(1)").await.is_err());
        assert!(service.create("a/b", "https://example.com").await.is_err());
    }

    #[tokio::test]
    async fn test_create_duplicate_slug_message() {
        let mut mock_repo = MockShortLinkRepository::new();

        mock_repo.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "duplicate key value violates unique constraint",
                json!({ "constraint": "short_links_slug_key" }),
            ))
        });

        let service = ShortLinkService::new(Arc::new(mock_repo));
        let err = service
            .create("abc", "https://example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.to_string(), "This slug already exists");
    }

    #[tokio::test]
    async fn test_resolve_counts_click() {
        let mut mock_repo = MockShortLinkRepository::new();

        mock_repo
            .expect_record_click()
            .withf(|slug| slug == "abc")
            .times(1)
            .returning(|_| Ok(Some("https://example.com".to_string())));

        let service = ShortLinkService::new(Arc::new(mock_repo));

        assert_eq!(
            service.resolve("abc").await.unwrap().as_deref(),
            Some("https://example.com")
        );
    }

    #[tokio::test]
    async fn test_resolve_unknown_and_empty() {
        let mut mock_repo = MockShortLinkRepository::new();

        mock_repo
            .expect_record_click()
            .times(1)
            .returning(|_| Ok(None));

        let service = ShortLinkService::new(Arc::new(mock_repo));

        assert_eq!(service.resolve("zzz").await.unwrap(), None);
        // Empty slug never reaches the database
        assert_eq!(service.resolve("").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let mut mock_repo = MockShortLinkRepository::new();
        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = ShortLinkService::new(Arc::new(mock_repo));
        let err = service.delete(42).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Short link not found");
    }
}
