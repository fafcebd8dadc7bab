//! PostgreSQL implementation of the social link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Icon, NewSocialLink, SocialLink};
use crate::domain::repositories::SocialLinkRepository;
use crate::error::AppError;

pub struct PgSocialLinkRepository {
    pool: Arc<PgPool>,
}

impl PgSocialLinkRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SocialLinkRow {
    id: i64,
    platform: String,
    url: String,
    icon: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SocialLinkRow> for SocialLink {
    type Error = AppError;

    fn try_from(r: SocialLinkRow) -> Result<Self, Self::Error> {
        let corrupt = |reason: String| {
            AppError::internal(
                "Stored social link has an invalid value",
                json!({ "id": r.id, "reason": reason }),
            )
        };

        let icon = r.icon.as_deref().map(str::parse::<Icon>).transpose().map_err(corrupt)?;

        Ok(SocialLink {
            id: r.id,
            platform: r.platform.parse().map_err(corrupt)?,
            url: r.url,
            icon,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

#[async_trait]
impl SocialLinkRepository for PgSocialLinkRepository {
    async fn create(&self, new_link: NewSocialLink) -> Result<SocialLink, AppError> {
        let row = sqlx::query_as::<_, SocialLinkRow>(
            r#"
            INSERT INTO social_links (platform, url, icon)
            VALUES ($1, $2, $3)
            RETURNING id, platform, url, icon, created_at, updated_at
            "#,
        )
        .bind(new_link.platform.as_str())
        .bind(&new_link.url)
        .bind(new_link.icon.map(|i| i.as_str()))
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn list(&self) -> Result<Vec<SocialLink>, AppError> {
        let rows = sqlx::query_as::<_, SocialLinkRow>(
            r#"
            SELECT id, platform, url, icon, created_at, updated_at
            FROM social_links
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM social_links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
