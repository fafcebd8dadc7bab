//! Dashboard pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::application::services::dashboard_service::DashboardStats;
use crate::domain::entities::{
    About, Experience, Icon, Platform, Project, SeoSettings, ShortLink, Skill, SkillCategory,
    SkillLevel, SocialLink,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::middleware::AdminSession;

/// Overview: statistics and the short link manager.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub email: String,
    pub stats: DashboardStats,
    pub links: Vec<ShortLink>,
}

/// # Endpoint
///
/// `GET /dashboard`
pub async fn dashboard_handler(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let (stats, links) = tokio::try_join!(
        state.dashboard_service.stats(),
        state.short_link_service.list(),
    )?;

    Ok(DashboardTemplate {
        email: session.email,
        stats,
        links,
    })
}

/// Projects, skills, experience and social links.
#[derive(Template, WebTemplate)]
#[template(path = "content.html")]
pub struct ContentTemplate {
    pub email: String,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub social_links: Vec<SocialLink>,
    pub categories: [SkillCategory; 6],
    pub levels: [SkillLevel; 3],
    pub platforms: [Platform; 13],
    pub icons: [Icon; 13],
}

/// # Endpoint
///
/// `GET /dashboard/content`
pub async fn content_handler(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let content = &state.content_service;

    let (projects, skills, experiences, social_links) = tokio::try_join!(
        state.project_service.list(),
        content.list_skills(),
        content.list_experiences(),
        content.list_social_links(),
    )?;

    Ok(ContentTemplate {
        email: session.email,
        projects,
        skills,
        experiences,
        social_links,
        categories: SkillCategory::ALL,
        levels: SkillLevel::ALL,
        platforms: Platform::ALL,
        icons: Icon::ALL,
    })
}

/// About section and SEO settings.
#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub email: String,
    pub about: Option<About>,
    pub seo: Option<SeoSettings>,
}

impl ProfileTemplate {
    pub fn twitter_card_is(&self, value: &str) -> bool {
        self.seo
            .as_ref()
            .and_then(|s| s.twitter_card)
            .is_some_and(|card| card.as_str() == value)
    }
}

/// # Endpoint
///
/// `GET /dashboard/profile`
pub async fn profile_handler(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let (about, seo) = tokio::try_join!(
        state.profile_service.about(),
        state.profile_service.seo(),
    )?;

    Ok(ProfileTemplate {
        email: session.email,
        about,
        seo,
    })
}
