//! Public portfolio page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::entities::{
    About, Experience, Project, SeoSettings, Skill, SkillCategory, SocialLink,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::middleware::CurrentSession;

/// Skills of one category, in display order.
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub seo: Option<SeoSettings>,
    pub about: Option<About>,
    pub projects: Vec<Project>,
    pub skill_groups: Vec<SkillGroup>,
    pub experiences: Vec<Experience>,
    pub social_links: Vec<SocialLink>,
    pub signed_in: bool,
}

/// Renders the portfolio.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<impl IntoResponse, AppError> {
    let content = &state.content_service;

    let (seo, about, projects, skills, experiences, social_links) = tokio::try_join!(
        state.profile_service.seo(),
        state.profile_service.about(),
        state.project_service.list(),
        content.list_skills(),
        content.list_experiences(),
        content.list_social_links(),
    )?;

    Ok(HomeTemplate {
        seo,
        about,
        projects,
        skill_groups: group_skills(skills),
        experiences,
        social_links,
        signed_in: session.is_some(),
    })
}

/// Groups skills by category, following [`SkillCategory::ALL`] order and
/// omitting empty categories.
pub fn group_skills(skills: Vec<Skill>) -> Vec<SkillGroup> {
    SkillCategory::ALL
        .into_iter()
        .map(|category| SkillGroup {
            category,
            skills: skills
                .iter()
                .filter(|s| s.category == category)
                .cloned()
                .collect(),
        })
        .filter(|group| !group.skills.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SkillLevel;
    use chrono::Utc;

    fn skill(name: &str, category: SkillCategory) -> Skill {
        Skill {
            id: 0,
            name: name.to_string(),
            category,
            level: SkillLevel::Intermediate,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_group_skills_orders_by_category() {
        let groups = group_skills(vec![
            skill("Docker", SkillCategory::DevOps),
            skill("Rust", SkillCategory::Backend),
            skill("React", SkillCategory::Frontend),
            skill("Axum", SkillCategory::Backend),
        ]);

        let categories: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            vec![
                SkillCategory::Frontend,
                SkillCategory::Backend,
                SkillCategory::DevOps
            ]
        );
        assert_eq!(groups[1].skills.len(), 2);
    }
}
