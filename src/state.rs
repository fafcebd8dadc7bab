//! Shared application state injected into every handler.

use chrono::Duration;
use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AuthService, ContentService, DashboardService, ProfileService, ProjectService,
    ShortLinkService,
};
use crate::infrastructure::persistence::{
    PgAuthRepository, PgExperienceRepository, PgProfileRepository, PgProjectRepository,
    PgShortLinkRepository, PgSkillRepository, PgSocialLinkRepository,
};
use crate::infrastructure::storage::ObjectStorage;
use crate::web::session_cookie::SessionCookie;

pub type PgContentService =
    ContentService<PgSkillRepository, PgExperienceRepository, PgSocialLinkRepository>;

/// Session settings taken from [`crate::config::Config`].
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub secret: String,
    pub ttl: Duration,
    pub cookie_secure: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub short_link_service: Arc<ShortLinkService<PgShortLinkRepository>>,
    pub project_service: Arc<ProjectService<PgProjectRepository>>,
    pub content_service: Arc<PgContentService>,
    pub profile_service: Arc<ProfileService<PgProfileRepository>>,
    pub auth_service: Arc<AuthService<PgAuthRepository>>,
    pub dashboard_service: Arc<DashboardService<PgProjectRepository, PgShortLinkRepository>>,
    pub storage: Arc<dyn ObjectStorage>,
    pub db: Arc<PgPool>,
    pub session_cookie: SessionCookie,
}

impl AppState {
    /// Wires repositories and services over one connection pool.
    pub fn new(pool: Arc<PgPool>, storage: Arc<dyn ObjectStorage>, session: SessionSettings) -> Self {
        let short_links = Arc::new(PgShortLinkRepository::new(pool.clone()));
        let projects = Arc::new(PgProjectRepository::new(pool.clone()));
        let skills = Arc::new(PgSkillRepository::new(pool.clone()));
        let experiences = Arc::new(PgExperienceRepository::new(pool.clone()));
        let social_links = Arc::new(PgSocialLinkRepository::new(pool.clone()));
        let profile = Arc::new(PgProfileRepository::new(pool.clone()));
        let auth = Arc::new(PgAuthRepository::new(pool.clone()));

        Self {
            short_link_service: Arc::new(ShortLinkService::new(short_links.clone())),
            project_service: Arc::new(ProjectService::new(projects.clone(), storage.clone())),
            content_service: Arc::new(ContentService::new(skills, experiences, social_links)),
            profile_service: Arc::new(ProfileService::new(profile, storage.clone())),
            auth_service: Arc::new(AuthService::new(auth, session.secret, session.ttl)),
            dashboard_service: Arc::new(DashboardService::new(projects, short_links)),
            storage,
            db: pool,
            session_cookie: SessionCookie::new(session.cookie_secure),
        }
    }
}
