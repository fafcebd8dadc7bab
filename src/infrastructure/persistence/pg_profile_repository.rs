//! PostgreSQL implementation of the About and SEO singletons.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{About, AboutUpdate, SeoSettings, SeoUpdate, TwitterCard};
use crate::domain::repositories::ProfileRepository;
use crate::error::AppError;

/// PostgreSQL repository for the single-row `about` and `seo_settings` tables.
///
/// Both tables pin their primary key to `1`, so every write is one
/// `INSERT ... ON CONFLICT (id) DO UPDATE` and the row can never be
/// duplicated, even under concurrent saves.
pub struct PgProfileRepository {
    pool: Arc<PgPool>,
}

impl PgProfileRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AboutRow {
    bio: String,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AboutRow> for About {
    fn from(r: AboutRow) -> Self {
        About {
            bio: r.bio,
            image_url: r.image_url,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SeoRow {
    title: String,
    description: String,
    keywords: Option<String>,
    og_image: Option<String>,
    twitter_card: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SeoRow> for SeoSettings {
    type Error = AppError;

    fn try_from(r: SeoRow) -> Result<Self, Self::Error> {
        let twitter_card = r
            .twitter_card
            .as_deref()
            .map(str::parse::<TwitterCard>)
            .transpose()
            .map_err(|reason| {
                AppError::internal(
                    "Stored SEO settings have an invalid value",
                    json!({ "reason": reason }),
                )
            })?;

        Ok(SeoSettings {
            title: r.title,
            description: r.description,
            keywords: r.keywords,
            og_image: r.og_image,
            twitter_card,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn get_about(&self) -> Result<Option<About>, AppError> {
        let row = sqlx::query_as::<_, AboutRow>(
            "SELECT bio, image_url, created_at, updated_at FROM about WHERE id = 1",
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn upsert_about(&self, update: AboutUpdate) -> Result<About, AppError> {
        let row = sqlx::query_as::<_, AboutRow>(
            r#"
            INSERT INTO about (id, bio, image_url)
            VALUES (1, $1, $2)
            ON CONFLICT (id) DO UPDATE
            SET bio = EXCLUDED.bio,
                image_url = COALESCE(EXCLUDED.image_url, about.image_url),
                updated_at = NOW()
            RETURNING bio, image_url, created_at, updated_at
            "#,
        )
        .bind(&update.bio)
        .bind(&update.image_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn get_seo(&self) -> Result<Option<SeoSettings>, AppError> {
        let row = sqlx::query_as::<_, SeoRow>(
            r#"
            SELECT title, description, keywords, og_image, twitter_card, created_at, updated_at
            FROM seo_settings
            WHERE id = 1
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn upsert_seo(&self, update: SeoUpdate) -> Result<SeoSettings, AppError> {
        let row = sqlx::query_as::<_, SeoRow>(
            r#"
            INSERT INTO seo_settings (id, title, description, keywords, og_image, twitter_card)
            VALUES (1, $1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title,
                description = EXCLUDED.description,
                keywords = EXCLUDED.keywords,
                og_image = COALESCE(EXCLUDED.og_image, seo_settings.og_image),
                twitter_card = EXCLUDED.twitter_card,
                updated_at = NOW()
            RETURNING title, description, keywords, og_image, twitter_card, created_at, updated_at
            "#,
        )
        .bind(&update.title)
        .bind(&update.description)
        .bind(&update.keywords)
        .bind(&update.og_image)
        .bind(update.twitter_card.map(|c| c.as_str()))
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }
}
