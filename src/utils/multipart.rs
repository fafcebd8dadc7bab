//! Collects `multipart/form-data` bodies into text fields and uploaded files.

use std::collections::HashMap;

use axum::extract::{FromRequest, Multipart, Request};
use serde_json::json;

use crate::domain::entities::UploadedFile;
use crate::error::AppError;

/// A fully buffered multipart form.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    /// Drains `multipart`, keeping text fields and non-empty file parts.
    ///
    /// A file input left blank by the browser arrives as a part with an empty
    /// file name and no bytes; such parts are dropped so the caller sees "no
    /// file" instead of a zero-byte upload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the body is malformed or exceeds the
    /// configured body limit.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = MultipartForm::default();

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(malformed)?;
                    let file = UploadedFile::new(file_name, content_type, bytes);

                    if !file.is_empty() {
                        form.files.insert(name, file);
                    }
                }
                None => {
                    let value = field.text().await.map_err(malformed)?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    /// Trimmed text value, `None` when missing or blank.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Removes and returns the uploaded file for `name`.
    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        fields: impl IntoIterator<Item = (&'static str, &'static str)>,
        files: impl IntoIterator<Item = (&'static str, UploadedFile)>,
    ) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files: files
                .into_iter()
                .map(|(k, f)| (k.to_string(), f))
                .collect(),
        }
    }
}

fn malformed(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::bad_request(
        "Invalid form submission",
        json!({ "reason": e.body_text(), "status": e.status().as_u16() }),
    )
}

/// Handlers take the buffered form directly; a request that is not
/// `multipart/form-data` is rejected as [`AppError::Validation`].
impl<S: Send + Sync> FromRequest<S> for MultipartForm {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state).await?;
        MultipartForm::read(multipart).await
    }
}
