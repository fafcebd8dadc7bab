//! Portfolio project management with image uploads.

use std::sync::Arc;

use crate::domain::entities::{NewProject, Project, ProjectPatch, UploadedFile};
use crate::domain::repositories::ProjectRepository;
use crate::error::AppError;
use crate::infrastructure::storage::ObjectStorage;
use crate::utils::token::generate_object_key;
use crate::utils::url_validator::validate_web_url;
use serde_json::json;

/// Form input for creating or updating a project.
#[derive(Debug, Default)]
pub struct ProjectInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub demo_link: Option<String>,
    pub image: Option<UploadedFile>,
}

/// Service for projects. Images go to object storage; the database keeps
/// only their public URL.
pub struct ProjectService<R: ProjectRepository> {
    repository: Arc<R>,
    storage: Arc<dyn ObjectStorage>,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repository: Arc<R>, storage: Arc<dyn ObjectStorage>) -> Self {
        Self {
            repository,
            storage,
        }
    }

    /// Creates a project. Title, description and image are all required.
    ///
    /// The image is uploaded first; if the insert then fails, the uploaded
    /// object is removed again.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is missing, the
    /// file is not an image, or the demo link is not an HTTP(S) URL.
    /// Returns [`AppError::Internal`] on storage or database errors.
    pub async fn create(&self, input: ProjectInput) -> Result<Project, AppError> {
        let (Some(title), Some(description), Some(image)) =
            (input.title, input.description, input.image)
        else {
            return Err(AppError::bad_request(
                "All fields are required",
                json!({ "fields": ["title", "description", "image"] }),
            ));
        };

        let demo_link = validate_demo_link(input.demo_link)?;
        let image_url = self.store_image(&image).await?;

        let new_project = NewProject {
            title,
            description,
            image_url: image_url.clone(),
            demo_link,
        };

        match self.repository.create(new_project).await {
            Ok(project) => {
                tracing::info!(id = project.id, "Project created");
                Ok(project)
            }
            Err(e) => {
                discard_upload(self.storage.as_ref(), &image_url).await;
                Err(e)
            }
        }
    }

    /// Updates a project's text fields, replacing the image only when a new
    /// one is supplied. An empty demo link clears it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if title or description is missing.
    /// Returns [`AppError::NotFound`] if the project does not exist.
    pub async fn update(&self, id: i64, input: ProjectInput) -> Result<Project, AppError> {
        let (Some(title), Some(description)) = (input.title, input.description) else {
            return Err(AppError::bad_request(
                "Title and description are required",
                json!({ "fields": ["title", "description"] }),
            ));
        };

        let demo_link = validate_demo_link(input.demo_link)?;

        let image_url = match &input.image {
            Some(image) => Some(self.store_image(image).await?),
            None => None,
        };

        let patch = ProjectPatch {
            title,
            description,
            demo_link,
            image_url: image_url.clone(),
        };

        let result = self.repository.update(id, patch).await;

        match result {
            Ok(Some(project)) => Ok(project),
            Ok(None) => {
                if let Some(url) = &image_url {
                    discard_upload(self.storage.as_ref(), url).await;
                }
                Err(AppError::not_found("Project not found", json!({ "id": id })))
            }
            Err(e) => {
                if let Some(url) = &image_url {
                    discard_upload(self.storage.as_ref(), url).await;
                }
                Err(e)
            }
        }
    }

    /// Deletes a project by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no project has this id.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Project not found", json!({ "id": id })));
        }

        tracing::info!(id, "Project deleted");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Project>, AppError> {
        self.repository.list().await
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    async fn store_image(&self, image: &UploadedFile) -> Result<String, AppError> {
        store_image(self.storage.as_ref(), image).await
    }
}

/// Uploads an image under a fresh random key and returns its public URL.
///
/// The stored extension is derived from the verified format, never from
/// the client's file name.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the file is not a PNG, JPEG, GIF,
/// WebP or AVIF image.
/// Returns [`AppError::Internal`] on storage errors.
pub(crate) async fn store_image(
    storage: &dyn ObjectStorage,
    image: &UploadedFile,
) -> Result<String, AppError> {
    let Some(format) = image.image_format() else {
        return Err(AppError::bad_request(
            "Only image files can be uploaded",
            json!({ "content_type": image.content_type }),
        ));
    };

    let key = generate_object_key(format.extension())?;
    let url = storage.upload(&key, &image.bytes).await?;

    tracing::debug!(key = %key, size = image.bytes.len(), "Image uploaded");
    Ok(url)
}

/// Removes an upload whose database write failed. Failures are logged only.
pub(crate) async fn discard_upload(storage: &dyn ObjectStorage, url: &str) {
    if let Err(e) = storage.delete_by_url(url).await {
        tracing::warn!(error = %e, url, "Failed to remove orphaned upload");
    }
}

fn validate_demo_link(demo_link: Option<String>) -> Result<Option<String>, AppError> {
    demo_link
        .map(|link| {
            validate_web_url(&link).map_err(|e| {
                AppError::bad_request(e.to_string(), json!({ "demo_link": link }))
            })
        })
        .transpose()
}
