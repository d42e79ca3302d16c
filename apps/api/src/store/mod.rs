//! Data collaborators behind the HTTP handlers.
//!
//! `AppState` holds an `Arc<dyn JobStore>`: `PgJobStore` in production, an
//! in-memory store in handler tests.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::job::{
    JobFilters, JobRow, JobSkillRequirement, JobSortField, JobStatus, SalaryRange, SortOrder,
};
use crate::models::skill::{SkillCategory, SkillRow, UserSkill};
use crate::pagination::Page;

#[derive(Debug, Clone, Default)]
pub struct SkillListFilter {
    pub category: Option<SkillCategory>,
    pub search: Option<String>,
}

/// Validated `/api/jobs/search` criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSearch {
    pub status: JobStatus,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub experience_level: Option<String>,
    pub salary: SalaryRange,
    /// Case-insensitive substring on title or company.
    pub text: Option<String>,
    pub sort: JobSortField,
    pub order: SortOrder,
}

impl Default for JobSearch {
    fn default() -> Self {
        Self {
            status: JobStatus::Active,
            location: None,
            job_type: None,
            experience_level: None,
            salary: SalaryRange::default(),
            text: None,
            sort: JobSortField::default(),
            order: SortOrder::default(),
        }
    }
}

#[async_trait]
pub trait JobStore: Send + Sync {
    /// All skills declared by a user, joined with the skill name.
    async fn user_skills(&self, user_id: i64) -> Result<Vec<UserSkill>, AppError>;

    /// Jobs with `status = active` matching the equality filters, in a stable order.
    async fn active_jobs(&self, filters: &JobFilters) -> Result<Vec<JobRow>, AppError>;

    /// Skill requirements for exactly the given jobs, joined with the skill name.
    async fn job_skills_for_jobs(
        &self,
        job_ids: &[i64],
    ) -> Result<Vec<JobSkillRequirement>, AppError>;

    async fn skill_by_id(&self, id: i64) -> Result<Option<SkillRow>, AppError>;

    async fn list_skills(
        &self,
        filter: &SkillListFilter,
        page: Page,
    ) -> Result<Vec<SkillRow>, AppError>;

    async fn job_by_id(&self, id: i64) -> Result<Option<JobRow>, AppError>;

    /// Cheap round trip used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;

    /// Jobs matching `search`, sorted by the requested column with id as tie-break.
    async fn search_jobs(&self, search: &JobSearch, page: Page) -> Result<Vec<JobRow>, AppError>;

    /// Jobs ordered by `posted_date` descending.
    async fn list_jobs(&self, status: Option<JobStatus>, page: Page)
        -> Result<Vec<JobRow>, AppError>;
}
