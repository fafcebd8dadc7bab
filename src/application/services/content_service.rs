//! Skills, work experience and social links.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::entities::{
    Experience, Icon, NewExperience, NewSkill, NewSocialLink, Platform, Skill, SkillCategory,
    SkillLevel, SocialLink,
};
use crate::domain::repositories::{ExperienceRepository, SkillRepository, SocialLinkRepository};
use crate::error::AppError;
use crate::utils::url_validator::validate_profile_url;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form input for a new work experience entry. Dates are `YYYY-MM-DD`.
#[derive(Debug, Default)]
pub struct ExperienceInput {
    pub title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

/// Service for the list-style portfolio sections.
pub struct ContentService<S, E, L>
where
    S: SkillRepository,
    E: ExperienceRepository,
    L: SocialLinkRepository,
{
    skills: Arc<S>,
    experiences: Arc<E>,
    social_links: Arc<L>,
}

impl<S, E, L> ContentService<S, E, L>
where
    S: SkillRepository,
    E: ExperienceRepository,
    L: SocialLinkRepository,
{
    pub fn new(skills: Arc<S>, experiences: Arc<E>, social_links: Arc<L>) -> Self {
        Self {
            skills,
            experiences,
            social_links,
        }
    }

    /// Adds a skill.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is missing or the category
    /// or level is not one of the known values.
    pub async fn create_skill(
        &self,
        name: Option<String>,
        category: Option<String>,
        level: Option<String>,
    ) -> Result<Skill, AppError> {
        let (Some(name), Some(category), Some(level)) = (name, category, level) else {
            return Err(AppError::bad_request(
                "Name, category and level are required",
                json!({ "fields": ["name", "category", "level"] }),
            ));
        };

        let category: SkillCategory = category.parse().map_err(invalid_choice)?;
        let level: SkillLevel = level.parse().map_err(invalid_choice)?;

        self.skills
            .create(NewSkill {
                name,
                category,
                level,
            })
            .await
    }

    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skills.list().await
    }

    pub async fn delete_skill(&self, id: i64) -> Result<(), AppError> {
        if !self.skills.delete(id).await? {
            return Err(AppError::not_found("Skill not found", json!({ "id": id })));
        }
        Ok(())
    }

    /// Adds a work experience entry. An absent end date means a current
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is missing, a
    /// date is malformed, or the end date precedes the start date.
    pub async fn create_experience(&self, input: ExperienceInput) -> Result<Experience, AppError> {
        let (Some(title), Some(company), Some(start_date), Some(description)) = (
            input.title,
            input.company,
            input.start_date,
            input.description,
        ) else {
            return Err(AppError::bad_request(
                "Title, company, start date and description are required",
                json!({ "fields": ["title", "company", "start_date", "description"] }),
            ));
        };

        let start_date = parse_date(&start_date)?;
        let end_date = input.end_date.as_deref().map(parse_date).transpose()?;

        if let Some(end) = end_date
            && end < start_date
        {
            return Err(AppError::bad_request(
                "End date cannot be before start date",
                json!({ "start_date": start_date, "end_date": end }),
            ));
        }

        self.experiences
            .create(NewExperience {
                title,
                company,
                start_date,
                end_date,
                description,
            })
            .await
    }

    pub async fn list_experiences(&self) -> Result<Vec<Experience>, AppError> {
        self.experiences.list().await
    }

    pub async fn delete_experience(&self, id: i64) -> Result<(), AppError> {
        if !self.experiences.delete(id).await? {
            return Err(AppError::not_found(
                "Experience not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    /// Adds a social profile link.
    ///
    /// When `icon` is empty the platform's default icon is shown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if platform or URL is missing, the
    /// platform or icon is unknown, or the URL is not a web or `mailto:` URL.
    pub async fn create_social_link(
        &self,
        platform: Option<String>,
        url: Option<String>,
        icon: Option<String>,
    ) -> Result<SocialLink, AppError> {
        let (Some(platform), Some(url)) = (platform, url) else {
            return Err(AppError::bad_request(
                "Platform and URL are required",
                json!({ "fields": ["platform", "url"] }),
            ));
        };

        let platform: Platform = platform.parse().map_err(invalid_choice)?;
        let icon = icon
            .as_deref()
            .map(str::parse::<Icon>)
            .transpose()
            .map_err(invalid_choice)?;
        let url = validate_profile_url(&url)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({ "url": url })))?;

        self.social_links
            .create(NewSocialLink {
                platform,
                url,
                icon,
            })
            .await
    }

    pub async fn list_social_links(&self) -> Result<Vec<SocialLink>, AppError> {
        self.social_links.list().await
    }

    pub async fn delete_social_link(&self, id: i64) -> Result<(), AppError> {
        if !self.social_links.delete(id).await? {
            return Err(AppError::not_found(
                "Social link not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }
}

fn invalid_choice(message: String) -> AppError {
    AppError::bad_request(message, json!({}))
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        AppError::bad_request(
            "Dates must use the YYYY-MM-DD format",
            json!({ "value": value }),
        )
    })
}
