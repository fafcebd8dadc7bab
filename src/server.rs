//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, storage setup, background tasks,
//! and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::session_sweeper::run_session_sweeper;
use crate::infrastructure::persistence::PgAuthRepository;
use crate::infrastructure::storage::{LocalStorage, ObjectStorage};
use crate::routes::{RouterSettings, app_router};
use crate::state::{AppState, SessionSettings};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// How often expired sessions are purged.
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(3600);

/// Opens the connection pool with the configured limits.
///
/// # Errors
///
/// Returns an error if the database is unreachable within the connect timeout.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Upload storage
/// - Seed administrator (when `ADMIN_EMAIL`/`ADMIN_PASSWORD` are set)
/// - Background session sweeper
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Upload directory cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect(&config).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    let storage: Arc<dyn ObjectStorage> = Arc::new(
        LocalStorage::new(&config.upload_dir, &config.upload_public_path)
            .await
            .context("Failed to prepare upload directory")?,
    );

    let pool = Arc::new(pool);
    let state = AppState::new(
        pool.clone(),
        storage,
        SessionSettings {
            secret: config.session_secret.clone(),
            ttl: chrono::Duration::hours(config.session_ttl_hours),
            cookie_secure: config.cookie_secure,
        },
    );

    if let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) {
        let created = state.auth_service.ensure_user(email, password).await?;
        if created {
            tracing::info!(email = %email, "Seed administrator created");
        }
    }

    tokio::spawn(run_session_sweeper(
        Arc::new(PgAuthRepository::new(pool.clone())),
        SESSION_SWEEP_INTERVAL,
    ));
    tracing::info!("Session sweeper started");

    let app = app_router(state, &RouterSettings::from(&config));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
