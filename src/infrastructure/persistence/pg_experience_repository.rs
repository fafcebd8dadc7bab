//! PostgreSQL implementation of the experience repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Experience, NewExperience};
use crate::domain::repositories::ExperienceRepository;
use crate::error::AppError;

pub struct PgExperienceRepository {
    pool: Arc<PgPool>,
}

impl PgExperienceRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ExperienceRow {
    id: i64,
    title: String,
    company: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ExperienceRow> for Experience {
    fn from(r: ExperienceRow) -> Self {
        Experience {
            id: r.id,
            title: r.title,
            company: r.company,
            start_date: r.start_date,
            end_date: r.end_date,
            description: r.description,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[async_trait]
impl ExperienceRepository for PgExperienceRepository {
    async fn create(&self, new_experience: NewExperience) -> Result<Experience, AppError> {
        let row = sqlx::query_as::<_, ExperienceRow>(
            r#"
            INSERT INTO experiences (title, company, start_date, end_date, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, company, start_date, end_date, description, created_at, updated_at
            "#,
        )
        .bind(&new_experience.title)
        .bind(&new_experience.company)
        .bind(new_experience.start_date)
        .bind(new_experience.end_date)
        .bind(&new_experience.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Experience>, AppError> {
        // Current positions first, then by most recent start
        let rows = sqlx::query_as::<_, ExperienceRow>(
            r#"
            SELECT id, title, company, start_date, end_date, description, created_at, updated_at
            FROM experiences
            ORDER BY end_date DESC NULLS FIRST, start_date DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
