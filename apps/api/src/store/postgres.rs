use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::job::{JobFilters, JobRow, JobSkillRequirement, JobStatus};
use crate::models::skill::{SkillRow, UserSkill};
use crate::pagination::Page;
use crate::store::{JobSearch, JobStore, SkillListFilter};

/// `JobStore` backed by the PostgreSQL schema in `migrations/`.
#[derive(Clone)]
pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn user_skills(&self, user_id: i64) -> Result<Vec<UserSkill>, AppError> {
        let rows = sqlx::query_as::<_, UserSkill>(
            r#"
            SELECT us.id, us.user_id, us.skill_id, us.proficiency_level, s.name AS skill_name
            FROM user_skills us
            INNER JOIN skills s ON s.id = us.skill_id
            WHERE us.user_id = $1
            ORDER BY us.skill_id, us.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn active_jobs(&self, filters: &JobFilters) -> Result<Vec<JobRow>, AppError> {
        // NULL parameters disable their filter, covering all four combinations.
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT * FROM jobs
            WHERE status = 'active'
              AND ($1::text IS NULL OR experience_level = $1)
              AND ($2::text IS NULL OR job_type = $2)
            ORDER BY id
            "#,
        )
        .bind(filters.experience_level.as_deref())
        .bind(filters.job_type.as_deref())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn job_skills_for_jobs(
        &self,
        job_ids: &[i64],
    ) -> Result<Vec<JobSkillRequirement>, AppError> {
        if job_ids.is_empty() {
            return Ok(vec![]);
        }

        let rows = sqlx::query_as::<_, JobSkillRequirement>(
            r#"
            SELECT js.job_id, js.skill_id, js.required, s.name AS skill_name
            FROM job_skills js
            INNER JOIN skills s ON s.id = js.skill_id
            WHERE js.job_id = ANY($1)
            ORDER BY js.id
            "#,
        )
        .bind(job_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn skill_by_id(&self, id: i64) -> Result<Option<SkillRow>, AppError> {
        let row = sqlx::query_as::<_, SkillRow>("SELECT id, name, category FROM skills WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn list_skills(
        &self,
        filter: &SkillListFilter,
        page: Page,
    ) -> Result<Vec<SkillRow>, AppError> {
        let rows = sqlx::query_as::<_, SkillRow>(
            r#"
            SELECT id, name, category FROM skills
            WHERE ($1::text IS NULL OR category = $1)
              AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%')
            ORDER BY id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.category.map(|c| c.as_str()))
        .bind(filter.search.as_deref())
        .bind(page.limit_i64())
        .bind(page.offset_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn job_by_id(&self, id: i64) -> Result<Option<JobRow>, AppError> {
        let row = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn list_jobs(
        &self,
        status: Option<JobStatus>,
        page: Page,
    ) -> Result<Vec<JobRow>, AppError> {
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT * FROM jobs
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY posted_date DESC, id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(status.map(|s| s.as_str()))
        .bind(page.limit_i64())
        .bind(page.offset_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn search_jobs(&self, search: &JobSearch, page: Page) -> Result<Vec<JobRow>, AppError> {
        // Sort column and direction come from closed enums, never from raw input.
        let sql = format!(
            r#"
            SELECT * FROM jobs
            WHERE status = $1
              AND ($2::text IS NULL OR location ILIKE '%' || $2 || '%')
              AND ($3::text IS NULL OR job_type = $3)
              AND ($4::text IS NULL OR experience_level = $4)
              AND ($5::int IS NULL OR $6::int IS NULL
                   OR (salary_min BETWEEN $5 AND $6)
                   OR (salary_max BETWEEN $5 AND $6)
                   OR (salary_min <= $5 AND salary_max >= $6))
              AND ($5::int IS NULL OR $6::int IS NOT NULL OR salary_max >= $5)
              AND ($6::int IS NULL OR $5::int IS NOT NULL OR salary_min <= $6)
              AND ($7::text IS NULL OR title ILIKE '%' || $7 || '%' OR company ILIKE '%' || $7 || '%')
            ORDER BY {} {}, id
            LIMIT $8 OFFSET $9
            "#,
            search.sort.column(),
            search.order.sql(),
        );

        let rows = sqlx::query_as::<_, JobRow>(&sql)
            .bind(search.status.as_str())
            .bind(search.location.as_deref())
            .bind(search.job_type.as_deref())
            .bind(search.experience_level.as_deref())
            .bind(search.salary.min)
            .bind(search.salary.max)
            .bind(search.text.as_deref())
            .bind(page.limit_i64())
            .bind(page.offset_i64())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
