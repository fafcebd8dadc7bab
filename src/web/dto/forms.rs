//! URL-encoded form bodies posted by the login page and dashboard.
//!
//! Missing fields deserialize as empty or `None` so that the services, not
//! the extractor, report which fields are required.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::application::services::content_service::ExperienceInput;

/// Trims a form value, mapping blank input to `None`.
pub fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ShortLinkForm {
    #[serde(default)]
    #[validate(length(max = 200, message = "Slug is too long"))]
    pub slug: String,

    #[serde(default)]
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: String,
}

#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct SkillForm {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 100, message = "Name is too long"))]
    pub name: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub category: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub level: Option<String>,
}

#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct ExperienceForm {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 200, message = "Title is too long"))]
    pub title: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 200, message = "Company is too long"))]
    pub company: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub start_date: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub end_date: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 5000, message = "Description is too long"))]
    pub description: Option<String>,
}

impl From<ExperienceForm> for ExperienceInput {
    fn from(form: ExperienceForm) -> Self {
        ExperienceInput {
            title: clean(form.title),
            company: clean(form.company),
            start_date: clean(form.start_date),
            end_date: clean(form.end_date),
            description: clean(form.description),
        }
    }
}

#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct SocialLinkForm {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub platform: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub icon: Option<String>,
}

/// Upper bounds for multipart text fields, checked by the handlers.
pub mod limits {
    pub const TITLE: usize = 200;
    pub const DESCRIPTION: usize = 5000;
    pub const BIO: usize = 10_000;
    pub const KEYWORDS: usize = 500;
}
