#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use chrono::Duration;
use portfolio_site::application::services::AuthService;
use portfolio_site::infrastructure::persistence::PgAuthRepository;
use portfolio_site::infrastructure::storage::LocalStorage;
use portfolio_site::routes::{self, RouterSettings};
use portfolio_site::state::{AppState, SessionSettings};
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const UPLOAD_PATH: &str = "/uploads";

/// Smallest valid PNG header, enough for an image upload.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

pub fn upload_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "portfolio-test-{}-{}-{}",
        name,
        std::process::id(),
        rand_suffix()
    ))
}

fn rand_suffix() -> u32 {
    use rand::Rng;
    rand::rng().random()
}

pub fn test_settings(upload_dir: PathBuf) -> RouterSettings {
    RouterSettings {
        static_dir: PathBuf::from("static"),
        upload_dir,
        upload_public_path: UPLOAD_PATH.to_string(),
        max_upload_bytes: 1024 * 1024,
        behind_proxy: false,
    }
}

pub async fn create_test_state(pool: PgPool, upload_dir: &PathBuf) -> AppState {
    let pool = Arc::new(pool);
    let storage = Arc::new(LocalStorage::new(upload_dir, UPLOAD_PATH).await.unwrap());

    let mut state = AppState::new(
        pool.clone(),
        storage,
        SessionSettings {
            secret: "test-session-secret".to_string(),
            ttl: Duration::hours(24),
            cookie_secure: false,
        },
    );

    // Minimum bcrypt cost keeps login tests fast
    state.auth_service = Arc::new(
        AuthService::new(
            Arc::new(PgAuthRepository::new(pool)),
            "test-session-secret".to_string(),
            Duration::hours(24),
        )
        .with_bcrypt_cost(4),
    );

    state
}

/// Builds the full application without rate limiting.
pub async fn create_test_app(pool: PgPool) -> (Router, AppState, PathBuf) {
    let dir = upload_dir("app");
    let state = create_test_state(pool, &dir).await;
    let app = routes::routes(state.clone(), &test_settings(dir.clone()));
    (app, state, dir)
}

pub async fn create_test_server(pool: PgPool) -> (TestServer, AppState) {
    let (app, state, _) = create_test_app(pool).await;
    (TestServer::new(app).unwrap(), state)
}

/// Creates the administrator and signs in, returning a `Cookie` header value.
pub async fn login(server: &TestServer, state: &AppState) -> String {
    state
        .auth_service
        .create_user(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();

    let response = server
        .post("/login")
        .form(&[("email", ADMIN_EMAIL), ("password", ADMIN_PASSWORD)])
        .await;

    assert_eq!(response.status_code(), 303);
    session_cookie(&response)
}

/// Extracts `name=value` from the response's `Set-Cookie` header.
pub fn session_cookie(response: &axum_test::TestResponse) -> String {
    response
        .header("set-cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

pub async fn create_short_link(pool: &PgPool, slug: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO short_links (slug, original_url) VALUES ($1, $2) RETURNING id")
        .bind(slug)
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn clicks(pool: &PgPool, slug: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM short_links WHERE slug = $1")
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_project(pool: &PgPool, title: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO projects (title, description, image_url, demo_link) VALUES ($1, 'desc', '/uploads/p.png', 'https://demo.example.com') RETURNING id",
    )
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}
