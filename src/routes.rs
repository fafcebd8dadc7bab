//! Top-level router configuration combining public and dashboard routes.
//!
//! # Route Structure
//!
//! - `GET  /`              - Portfolio (public)
//! - `GET  /{slug}`        - Short link redirect (public)
//! - `GET  /health`        - Health check: database, storage (public)
//! - `/login`, `/logout`   - Sign in and out
//! - `/dashboard/*`        - Admin pages and actions (session required)
//! - `/static/*`           - Dashboard script and styles
//! - `/uploads/*`          - Uploaded images (path configurable)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Session gate** - Resolves the session cookie, guards `/dashboard`
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use std::path::PathBuf;

use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::rate_limit::{self, Quota};
use crate::api::middleware::tracing;
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use crate::web::middleware::session_gate;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Filesystem and limit settings for the router.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub static_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub upload_public_path: String,
    pub max_upload_bytes: usize,
    pub behind_proxy: bool,
}

impl From<&Config> for RouterSettings {
    fn from(config: &Config) -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            upload_dir: PathBuf::from(&config.upload_dir),
            upload_public_path: config.upload_public_path.clone(),
            max_upload_bytes: config.max_upload_bytes,
            behind_proxy: config.behind_proxy,
        }
    }
}

/// Constructs the production router: all routes, rate limits and trailing
/// slash normalization.
///
/// Rate limiting reads the client address from connect info, so the server
/// must be started with `into_make_service_with_connect_info`.
pub fn app_router(state: AppState, settings: &RouterSettings) -> NormalizePath<Router> {
    let bp = settings.behind_proxy;

    let public = rate_limit::limit(public_routes(), Quota::PUBLIC, bp)
        .merge(rate_limit::limit(web::routes::login_routes(), Quota::LOGIN, bp));
    let dashboard = rate_limit::limit(
        web::routes::dashboard_routes(settings.max_upload_bytes),
        Quota::DASHBOARD,
        bp,
    );

    let router = assemble(state, settings, public, dashboard);
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// The same routes without rate limiting, for tests and embedding.
pub fn routes(state: AppState, settings: &RouterSettings) -> Router {
    let public = public_routes().merge(web::routes::login_routes());
    let dashboard = web::routes::dashboard_routes(settings.max_upload_bytes);

    assemble(state, settings, public, dashboard)
}

fn public_routes() -> Router<AppState> {
    web::routes::public_routes()
        .route("/health", get(health_handler))
        .route("/{slug}", get(redirect_handler))
}

fn assemble(
    state: AppState,
    settings: &RouterSettings,
    public: Router<AppState>,
    dashboard: Router<AppState>,
) -> Router {
    Router::new()
        .merge(public)
        .nest("/dashboard", dashboard)
        .nest_service("/static", ServeDir::new(&settings.static_dir))
        .nest_service(
            &settings.upload_public_path,
            ServeDir::new(&settings.upload_dir),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_gate::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}
