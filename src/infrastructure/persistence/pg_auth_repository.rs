//! PostgreSQL implementation of admin users and sessions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{AdminUser, NewSession, Session};
use crate::domain::repositories::AuthRepository;
use crate::error::AppError;

/// PostgreSQL repository for dashboard credentials and sessions.
///
/// Only HMAC digests of session tokens are stored. Raw tokens never reach the
/// database.
pub struct PgAuthRepository {
    pool: Arc<PgPool>,
}

impl PgAuthRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AdminUserRow {
    id: i64,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<AdminUserRow> for AdminUser {
    fn from(r: AdminUserRow) -> Self {
        AdminUser {
            id: r.id,
            email: r.email,
            password_hash: r.password_hash,
            created_at: r.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    user_id: i64,
    email: String,
    expires_at: DateTime<Utc>,
}

#[async_trait]
impl AuthRepository for PgAuthRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AdminUser>, AppError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM admin_users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn create_user(&self, email: &str, password_hash: &str) -> Result<AdminUser, AppError> {
        let row = sqlx::query_as::<_, AdminUserRow>(
            r#"
            INSERT INTO admin_users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_users(&self) -> Result<Vec<AdminUser>, AppError> {
        let rows = sqlx::query_as::<_, AdminUserRow>(
            "SELECT id, email, password_hash, created_at FROM admin_users ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update_password(&self, email: &str, password_hash: &str) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE admin_users SET password_hash = $2 WHERE email = $1")
            .bind(email)
            .bind(password_hash)
            .execute(&mut *tx)
            .await?;

        // A password change signs the user out everywhere
        sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE user_id = (SELECT id FROM admin_users WHERE email = $1)
            "#,
        )
        .bind(email)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_user(&self, email: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM admin_users WHERE email = $1")
            .bind(email)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn create_session(&self, new_session: NewSession) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (token_hash, user_id, user_agent, expires_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&new_session.token_hash)
        .bind(new_session.user_id)
        .bind(&new_session.user_agent)
        .bind(new_session.expires_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn find_session(&self, token_hash: &str) -> Result<Option<Session>, AppError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT s.user_id, u.email, s.expires_at
            FROM sessions s
            JOIN admin_users u ON u.id = s.user_id
            WHERE s.token_hash = $1
              AND s.expires_at > NOW()
            "#,
        )
        .bind(token_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| Session {
            user_id: r.user_id,
            email: r.email,
            expires_at: r.expires_at,
        }))
    }

    async fn extend_session(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE sessions SET expires_at = $2 WHERE token_hash = $1")
            .bind(token_hash)
            .bind(expires_at)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete_session(&self, token_hash: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired_sessions(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= NOW()")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
