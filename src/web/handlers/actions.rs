//! Dashboard form actions.
//!
//! Every action answers `200 {"success": true}` or an error status with
//! `{"error": "<message>"}`; the dashboard script shows the message and
//! reloads on success.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::application::services::profile_service::SeoInput;
use crate::application::services::project_service::ProjectInput;
use crate::error::{ActionOutcome, AppError};
use crate::state::AppState;
use crate::utils::multipart::MultipartForm;
use crate::web::dto::forms::{
    ExperienceForm, ShortLinkForm, SkillForm, SocialLinkForm, clean, limits,
};
use crate::web::extract::{ActionForm, ActionPath};
use crate::web::middleware::AdminSession;

type ActionResult = Result<Json<ActionOutcome>, AppError>;

fn done() -> ActionResult {
    Ok(Json(ActionOutcome::success()))
}

/// `POST /dashboard/short-links` (form: `slug`, `url`)
pub async fn create_short_link_handler(
    State(state): State<AppState>,
    _admin: AdminSession,
    ActionForm(form): ActionForm<ShortLinkForm>,
) -> ActionResult {
    form.validate()?;

    let link = state
        .short_link_service
        .create(&form.slug, &form.url)
        .await?;

    tracing::info!(slug = %link.slug, "Short link created");
    done()
}

/// `POST /dashboard/short-links/{id}/delete`
pub async fn delete_short_link_handler(
    State(state): State<AppState>,
    _admin: AdminSession,
    ActionPath(id): ActionPath<i64>,
) -> ActionResult {
    state.short_link_service.delete(id).await?;
    done()
}

/// `POST /dashboard/projects` (multipart: `title`, `description`,
/// `demo_link`, `image`)
pub async fn create_project_handler(
    State(state): State<AppState>,
    _admin: AdminSession,
    form: MultipartForm,
) -> ActionResult {
    let input = project_input(form)?;
    state.project_service.create(input).await?;
    done()
}

/// `POST /dashboard/projects/{id}` (multipart, `image` optional)
pub async fn update_project_handler(
    State(state): State<AppState>,
    _admin: AdminSession,
    ActionPath(id): ActionPath<i64>,
    form: MultipartForm,
) -> ActionResult {
    let input = project_input(form)?;
    state.project_service.update(id, input).await?;
    done()
}

/// `POST /dashboard/projects/{id}/delete`
pub async fn delete_project_handler(
    State(state): State<AppState>,
    _admin: AdminSession,
    ActionPath(id): ActionPath<i64>,
) -> ActionResult {
    state.project_service.delete(id).await?;
    done()
}

/// `POST /dashboard/skills` (form: `name`, `category`, `level`)
pub async fn create_skill_handler(
    State(state): State<AppState>,
    _admin: AdminSession,
    ActionForm(form): ActionForm<SkillForm>,
) -> ActionResult {
    form.validate()?;

    state
        .content_service
        .create_skill(clean(form.name), clean(form.category), clean(form.level))
        .await?;
    done()
}

/// `POST /dashboard/skills/{id}/delete`
pub async fn delete_skill_handler(
    State(state): State<AppState>,
    _admin: AdminSession,
    ActionPath(id): ActionPath<i64>,
) -> ActionResult {
    state.content_service.delete_skill(id).await?;
    done()
}

/// `POST /dashboard/experiences` (form: `title`, `company`, `start_date`,
/// `end_date`, `description`)
pub async fn create_experience_handler(
    State(state): State<AppState>,
    _admin: AdminSession,
    ActionForm(form): ActionForm<ExperienceForm>,
) -> ActionResult {
    form.validate()?;

    state.content_service.create_experience(form.into()).await?;
    done()
}

/// `POST /dashboard/experiences/{id}/delete`
pub async fn delete_experience_handler(
    State(state): State<AppState>,
    _admin: AdminSession,
    ActionPath(id): ActionPath<i64>,
) -> ActionResult {
    state.content_service.delete_experience(id).await?;
    done()
}

/// `POST /dashboard/social-links` (form: `platform`, `url`, `icon`)
pub async fn create_social_link_handler(
    State(state): State<AppState>,
    _admin: AdminSession,
    ActionForm(form): ActionForm<SocialLinkForm>,
) -> ActionResult {
    form.validate()?;

    state
        .content_service
        .create_social_link(clean(form.platform), clean(form.url), clean(form.icon))
        .await?;
    done()
}

/// `POST /dashboard/social-links/{id}/delete`
pub async fn delete_social_link_handler(
    State(state): State<AppState>,
    _admin: AdminSession,
    ActionPath(id): ActionPath<i64>,
) -> ActionResult {
    state.content_service.delete_social_link(id).await?;
    done()
}

/// `POST /dashboard/about` (multipart: `bio`, `image`)
pub async fn save_about_handler(
    State(state): State<AppState>,
    _admin: AdminSession,
    mut form: MultipartForm,
) -> ActionResult {
    let bio = bounded(&form, "bio", limits::BIO)?;
    let image = form.take_file("image");

    state.profile_service.save_about(bio, image).await?;
    done()
}

/// `POST /dashboard/seo` (multipart: `title`, `description`, `keywords`,
/// `twitter_card`, `og_image`)
pub async fn save_seo_handler(
    State(state): State<AppState>,
    _admin: AdminSession,
    mut form: MultipartForm,
) -> ActionResult {
    let input = SeoInput {
        title: bounded(&form, "title", limits::TITLE)?,
        description: bounded(&form, "description", limits::DESCRIPTION)?,
        keywords: bounded(&form, "keywords", limits::KEYWORDS)?,
        twitter_card: form.text("twitter_card"),
        og_image: form.take_file("og_image"),
    };

    state.profile_service.save_seo(input).await?;
    done()
}

fn project_input(mut form: MultipartForm) -> Result<ProjectInput, AppError> {
    Ok(ProjectInput {
        title: bounded(&form, "title", limits::TITLE)?,
        description: bounded(&form, "description", limits::DESCRIPTION)?,
        demo_link: form.text("demo_link"),
        image: form.take_file("image"),
    })
}

/// Text field with a maximum length in characters.
fn bounded(form: &MultipartForm, name: &str, max: usize) -> Result<Option<String>, AppError> {
    let value = form.text(name);

    if value.as_ref().is_some_and(|v| v.chars().count() > max) {
        return Err(AppError::bad_request(
            format!("Field '{}' must be at most {} characters", name, max),
            json!({ "field": name, "max": max }),
        ));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded() {
        let form = MultipartForm::from_parts([("title", "Short"), ("bio", "  ")], []);

        assert_eq!(bounded(&form, "title", 10).unwrap().as_deref(), Some("Short"));
        assert!(bounded(&form, "title", 3).is_err());
        assert_eq!(bounded(&form, "bio", 3).unwrap(), None);
    }
}
