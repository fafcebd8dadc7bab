//! About section and SEO settings.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::project_service::{discard_upload, store_image};
use crate::domain::entities::{
    About, AboutUpdate, SeoSettings, SeoUpdate, TwitterCard, UploadedFile,
};
use crate::domain::repositories::ProfileRepository;
use crate::error::AppError;
use crate::infrastructure::storage::ObjectStorage;

/// Form input for the SEO settings.
#[derive(Debug, Default)]
pub struct SeoInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub twitter_card: Option<String>,
    pub og_image: Option<UploadedFile>,
}

/// Service for the singleton profile records.
///
/// Saving always goes through an upsert, so the first save creates the row
/// and later saves replace it.
pub struct ProfileService<R: ProfileRepository> {
    repository: Arc<R>,
    storage: Arc<dyn ObjectStorage>,
}

impl<R: ProfileRepository> ProfileService<R> {
    pub fn new(repository: Arc<R>, storage: Arc<dyn ObjectStorage>) -> Self {
        Self {
            repository,
            storage,
        }
    }

    pub async fn about(&self) -> Result<Option<About>, AppError> {
        self.repository.get_about().await
    }

    pub async fn seo(&self) -> Result<Option<SeoSettings>, AppError> {
        self.repository.get_seo().await
    }

    /// Saves the About section. The existing photo is kept when no new one
    /// is uploaded; a new photo is removed again if the save fails.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the bio is missing or the photo is
    /// not an image.
    pub async fn save_about(
        &self,
        bio: Option<String>,
        image: Option<UploadedFile>,
    ) -> Result<About, AppError> {
        let Some(bio) = bio else {
            return Err(AppError::bad_request(
                "Bio is required",
                json!({ "fields": ["bio"] }),
            ));
        };

        let image_url = match &image {
            Some(image) => Some(store_image(self.storage.as_ref(), image).await?),
            None => None,
        };

        let result = self
            .repository
            .upsert_about(AboutUpdate {
                bio,
                image_url: image_url.clone(),
            })
            .await;

        match result {
            Ok(about) => {
                tracing::info!("About section saved");
                Ok(about)
            }
            Err(e) => {
                if let Some(url) = &image_url {
                    discard_upload(self.storage.as_ref(), url).await;
                }
                Err(e)
            }
        }
    }

    /// Saves the SEO settings. The existing Open Graph image is kept when no
    /// new one is uploaded; a new image is removed again if the save fails.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if title or description is missing
    /// or the Twitter card type is unknown.
    pub async fn save_seo(&self, input: SeoInput) -> Result<SeoSettings, AppError> {
        let (Some(title), Some(description)) = (input.title, input.description) else {
            return Err(AppError::bad_request(
                "Title and description are required",
                json!({ "fields": ["title", "description"] }),
            ));
        };

        let twitter_card = input
            .twitter_card
            .as_deref()
            .map(str::parse::<TwitterCard>)
            .transpose()
            .map_err(|message| AppError::bad_request(message, json!({})))?;

        let og_image = match &input.og_image {
            Some(image) => Some(store_image(self.storage.as_ref(), image).await?),
            None => None,
        };

        let result = self
            .repository
            .upsert_seo(SeoUpdate {
                title,
                description,
                keywords: input.keywords,
                og_image: og_image.clone(),
                twitter_card,
            })
            .await;

        match result {
            Ok(seo) => {
                tracing::info!("SEO settings saved");
                Ok(seo)
            }
            Err(e) => {
                if let Some(url) = &og_image {
                    discard_upload(self.storage.as_ref(), url).await;
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockProfileRepository;
    use crate::infrastructure::storage::MockObjectStorage;
    use axum::body::Bytes;
    use chrono::Utc;

    fn about_from(update: AboutUpdate) -> About {
        About {
            bio: update.bio,
            image_url: update.image_url,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_save_about_without_photo() {
        let mut mock_repo = MockProfileRepository::new();
        let mut mock_storage = MockObjectStorage::new();
        mock_storage.expect_upload().times(0);

        mock_repo
            .expect_upsert_about()
            .withf(|u| u.bio == "Hello" && u.image_url.is_none())
            .times(1)
            .returning(|u| Ok(about_from(u)));

        let service = ProfileService::new(Arc::new(mock_repo), Arc::new(mock_storage));
        let about = service
            .save_about(Some("Hello".to_string()), None)
            .await
            .unwrap();

        assert_eq!(about.bio, "Hello");
    }

    #[tokio::test]
    async fn test_save_about_with_photo() {
        let mut mock_repo = MockProfileRepository::new();
        let mut mock_storage = MockObjectStorage::new();

        mock_storage
            .expect_upload()
            .times(1)
            .returning(|key, _| Ok(format!("/uploads/{}", key)));
        mock_repo
            .expect_upsert_about()
            .withf(|u| u.image_url.as_deref().is_some_and(|url| url.ends_with(".jpg")))
            .times(1)
            .returning(|u| Ok(about_from(u)));

        let service = ProfileService::new(Arc::new(mock_repo), Arc::new(mock_storage));
        let photo = UploadedFile::new(
            "me.jpg",
            Some("image/jpeg".to_string()),
            Bytes::from_static(b"\xFF\xD8\xFF\xE0"),
        );

        assert!(
            service
                .save_about(Some("Hello".to_string()), Some(photo))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_save_about_removes_photo_when_save_fails() {
        let mut mock_repo = MockProfileRepository::new();
        let mut mock_storage = MockObjectStorage::new();

        mock_storage
            .expect_upload()
            .times(1)
            .returning(|key, _| Ok(format!("/uploads/{}", key)));
        mock_storage
            .expect_delete_by_url()
            .withf(|url| url.starts_with("/uploads/") && url.ends_with(".jpg"))
            .times(1)
            .returning(|_| Ok(()));
        mock_repo
            .expect_upsert_about()
            .times(1)
            .returning(|_| Err(AppError::internal("connection reset", json!({}))));

        let service = ProfileService::new(Arc::new(mock_repo), Arc::new(mock_storage));
        let photo = UploadedFile::new(
            "me.jpg",
            Some("image/jpeg".to_string()),
            Bytes::from_static(b"\xFF\xD8\xFF\xE0"),
        );

        let err = service
            .save_about(Some("Hello".to_string()), Some(photo))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_save_seo_removes_image_when_save_fails() {
        let mut mock_repo = MockProfileRepository::new();
        let mut mock_storage = MockObjectStorage::new();

        mock_storage
            .expect_upload()
            .times(1)
            .returning(|key, _| Ok(format!("/uploads/{}", key)));
        mock_storage
            .expect_delete_by_url()
            .withf(|url| url.ends_with(".png"))
            .times(1)
            .returning(|_| Ok(()));
        mock_repo
            .expect_upsert_seo()
            .times(1)
            .returning(|_| Err(AppError::internal("connection reset", json!({}))));

        let service = ProfileService::new(Arc::new(mock_repo), Arc::new(mock_storage));
        let input = SeoInput {
            title: Some("Jane Doe".to_string()),
            description: Some("Portfolio".to_string()),
            og_image: Some(UploadedFile::new(
                "og.png",
                Some("image/png".to_string()),
                Bytes::from_static(b"\x89PNG\r\n\x1a\n"),
            )),
            ..SeoInput::default()
        };

        assert!(service.save_seo(input).await.is_err());
    }

    #[tokio::test]
    async fn test_save_about_requires_bio() {
        let mut mock_repo = MockProfileRepository::new();
        mock_repo.expect_upsert_about().times(0);

        let service = ProfileService::new(Arc::new(mock_repo), Arc::new(MockObjectStorage::new()));
        let err = service.save_about(None, None).await.unwrap_err();

        assert_eq!(err.to_string(), "Bio is required");
    }

    #[tokio::test]
    async fn test_save_seo() {
        let mut mock_repo = MockProfileRepository::new();
        mock_repo
            .expect_upsert_seo()
            .withf(|u| {
                u.title == "Jane Doe"
                    && u.twitter_card == Some(TwitterCard::SummaryLargeImage)
                    && u.og_image.is_none()
            })
            .times(1)
            .returning(|u| {
                Ok(SeoSettings {
                    title: u.title,
                    description: u.description,
                    keywords: u.keywords,
                    og_image: u.og_image,
                    twitter_card: u.twitter_card,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                })
            });

        let service = ProfileService::new(Arc::new(mock_repo), Arc::new(MockObjectStorage::new()));
        let input = SeoInput {
            title: Some("Jane Doe".to_string()),
            description: Some("Portfolio".to_string()),
            keywords: Some("rust, web".to_string()),
            twitter_card: Some("summary_large_image".to_string()),
            og_image: None,
        };

        let seo = service.save_seo(input).await.unwrap();
        assert_eq!(seo.keywords.as_deref(), Some("rust, web"));
    }

    #[tokio::test]
    async fn test_save_seo_validation() {
        let mut mock_repo = MockProfileRepository::new();
        mock_repo.expect_upsert_seo().times(0);

        let service = ProfileService::new(Arc::new(mock_repo), Arc::new(MockObjectStorage::new()));

        let err = service
            .save_seo(SeoInput {
                title: Some("Jane".to_string()),
                ..SeoInput::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Title and description are required");

        let err = service
            .save_seo(SeoInput {
                title: Some("Jane".to_string()),
                description: Some("Portfolio".to_string()),
                twitter_card: Some("player".to_string()),
                ..SeoInput::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
