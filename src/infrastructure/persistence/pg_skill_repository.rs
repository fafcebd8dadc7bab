//! PostgreSQL implementation of the skill repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewSkill, Skill};
use crate::domain::repositories::SkillRepository;
use crate::error::AppError;

pub struct PgSkillRepository {
    pool: Arc<PgPool>,
}

impl PgSkillRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SkillRow {
    id: i64,
    name: String,
    category: String,
    level: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SkillRow> for Skill {
    type Error = AppError;

    fn try_from(r: SkillRow) -> Result<Self, Self::Error> {
        let corrupt = |reason: String| {
            AppError::internal(
                "Stored skill has an invalid value",
                json!({ "id": r.id, "reason": reason }),
            )
        };

        Ok(Skill {
            id: r.id,
            category: r.category.parse().map_err(corrupt)?,
            level: r.level.parse().map_err(corrupt)?,
            name: r.name,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

#[async_trait]
impl SkillRepository for PgSkillRepository {
    async fn create(&self, new_skill: NewSkill) -> Result<Skill, AppError> {
        let row = sqlx::query_as::<_, SkillRow>(
            r#"
            INSERT INTO skills (name, category, level)
            VALUES ($1, $2, $3)
            RETURNING id, name, category, level, created_at, updated_at
            "#,
        )
        .bind(&new_skill.name)
        .bind(new_skill.category.as_str())
        .bind(new_skill.level.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn list(&self) -> Result<Vec<Skill>, AppError> {
        let rows = sqlx::query_as::<_, SkillRow>(
            r#"
            SELECT id, name, category, level, created_at, updated_at
            FROM skills
            ORDER BY category, name, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
