//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::*;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

/// Dashboard routes, nested under `/dashboard`.
///
/// Protected by [`crate::web::middleware::session_gate`]: without a session
/// every path here redirects to `/login`.
///
/// # Endpoints
///
/// - `GET /` - Overview with statistics and short links
/// - `GET /content` - Projects, skills, experience, social links
/// - `GET /profile` - About section and SEO settings
/// - `POST /short-links`, `POST /short-links/{id}/delete`
/// - `POST /projects`, `POST /projects/{id}`, `POST /projects/{id}/delete`
/// - `POST /skills`, `POST /skills/{id}/delete`
/// - `POST /experiences`, `POST /experiences/{id}/delete`
/// - `POST /social-links`, `POST /social-links/{id}/delete`
/// - `POST /about`, `POST /seo`
///
/// `max_upload_bytes` caps request bodies, which bounds image uploads.
pub fn dashboard_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/content", get(content_handler))
        .route("/profile", get(profile_handler))
        .route("/short-links", post(create_short_link_handler))
        .route("/short-links/{id}/delete", post(delete_short_link_handler))
        .route("/projects", post(create_project_handler))
        .route("/projects/{id}", post(update_project_handler))
        .route("/projects/{id}/delete", post(delete_project_handler))
        .route("/skills", post(create_skill_handler))
        .route("/skills/{id}/delete", post(delete_skill_handler))
        .route("/experiences", post(create_experience_handler))
        .route("/experiences/{id}/delete", post(delete_experience_handler))
        .route("/social-links", post(create_social_link_handler))
        .route("/social-links/{id}/delete", post(delete_social_link_handler))
        .route("/about", post(save_about_handler))
        .route("/seo", post(save_seo_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// Public pages.
///
/// # Endpoints
///
/// - `GET /` - Portfolio
/// - `POST /logout` - Sign out
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/logout", post(logout_handler))
}

/// Sign-in page, kept separate so it can carry a stricter rate limit.
///
/// # Endpoints
///
/// - `GET /login`, `POST /login`
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/login", get(login_page_handler).post(login_handler))
}
