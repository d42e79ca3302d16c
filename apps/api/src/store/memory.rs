//! In-memory `JobStore` used by handler and engine tests.

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::errors::AppError;
use crate::models::job::{JobFilters, JobRow, JobSkillRequirement, JobSortField, JobStatus, SortOrder};
use crate::models::skill::{SkillRow, UserSkill};
use crate::pagination::Page;
use crate::store::{JobSearch, JobStore, SkillListFilter};

#[derive(Debug, Clone, Default)]
pub struct MemoryJobStore {
    pub skills: Vec<SkillRow>,
    pub jobs: Vec<JobRow>,
    pub user_skills: Vec<UserSkill>,
    /// (job_id, skill_id, required)
    pub job_skills: Vec<(i64, i64, bool)>,
    /// When set, every call fails with this message.
    pub failure: Option<String>,
}

impl MemoryJobStore {
    pub fn with_skill(mut self, id: i64, name: &str, category: &str) -> Self {
        self.skills.push(SkillRow {
            id,
            name: name.to_string(),
            category: category.to_string(),
        });
        self
    }

    pub fn with_job(mut self, job: JobRow) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn with_user_skill(mut self, user_id: i64, skill_id: i64, level: &str) -> Self {
        let id = self.user_skills.len() as i64 + 1;
        let skill_name = self.skill_name(skill_id);
        self.user_skills.push(UserSkill {
            id,
            user_id,
            skill_id,
            proficiency_level: level.to_string(),
            skill_name,
        });
        self
    }

    pub fn with_job_skill(mut self, job_id: i64, skill_id: i64, required: bool) -> Self {
        self.job_skills.push((job_id, skill_id, required));
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    fn skill_name(&self, skill_id: i64) -> String {
        self.skills
            .iter()
            .find(|s| s.id == skill_id)
            .map(|s| s.name.clone())
            .unwrap_or_default()
    }

    fn check(&self) -> Result<(), AppError> {
        match &self.failure {
            Some(msg) => Err(AppError::Internal(anyhow!(msg.clone()))),
            None => Ok(()),
        }
    }
}

/// Builds a job posted `id` days into 2026, so higher ids are newer.
pub fn sample_job(id: i64, title: &str, experience_level: &str, job_type: &str) -> JobRow {
    let posted = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::days(id);
    JobRow {
        id,
        title: title.to_string(),
        company: format!("Company {id}"),
        description: format!("{title} role"),
        location: "Remote".to_string(),
        salary_min: Some(80_000),
        salary_max: Some(120_000),
        job_type: job_type.to_string(),
        experience_level: experience_level.to_string(),
        posted_date: posted,
        application_deadline: None,
        status: "active".to_string(),
        created_at: posted,
        updated_at: posted,
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn user_skills(&self, user_id: i64) -> Result<Vec<UserSkill>, AppError> {
        self.check()?;
        let mut rows: Vec<UserSkill> = self
            .user_skills
            .iter()
            .filter(|us| us.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by_key(|us| (us.skill_id, us.id));
        Ok(rows)
    }

    async fn active_jobs(&self, filters: &JobFilters) -> Result<Vec<JobRow>, AppError> {
        self.check()?;
        Ok(self
            .jobs
            .iter()
            .filter(|j| j.status == JobStatus::Active.as_str())
            .filter(|j| {
                filters
                    .experience_level
                    .as_deref()
                    .map_or(true, |level| j.experience_level == level)
            })
            .filter(|j| filters.job_type.as_deref().map_or(true, |t| j.job_type == t))
            .cloned()
            .collect())
    }

    async fn job_skills_for_jobs(
        &self,
        job_ids: &[i64],
    ) -> Result<Vec<JobSkillRequirement>, AppError> {
        self.check()?;
        Ok(self
            .job_skills
            .iter()
            .filter(|(job_id, _, _)| job_ids.contains(job_id))
            .map(|&(job_id, skill_id, required)| JobSkillRequirement {
                job_id,
                skill_id,
                required,
                skill_name: self.skill_name(skill_id),
            })
            .collect())
    }

    async fn skill_by_id(&self, id: i64) -> Result<Option<SkillRow>, AppError> {
        self.check()?;
        Ok(self.skills.iter().find(|s| s.id == id).cloned())
    }

    async fn list_skills(
        &self,
        filter: &SkillListFilter,
        page: Page,
    ) -> Result<Vec<SkillRow>, AppError> {
        self.check()?;
        let search = filter.search.as_deref().map(str::to_lowercase);
        let matching = self
            .skills
            .iter()
            .filter(|s| filter.category.map_or(true, |c| s.category == c.as_str()))
            .filter(|s| {
                search
                    .as_deref()
                    .map_or(true, |q| s.name.to_lowercase().contains(q))
            })
            .cloned()
            .collect();
        Ok(page.apply(matching))
    }

    async fn job_by_id(&self, id: i64) -> Result<Option<JobRow>, AppError> {
        self.check()?;
        Ok(self.jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn list_jobs(
        &self,
        status: Option<JobStatus>,
        page: Page,
    ) -> Result<Vec<JobRow>, AppError> {
        self.check()?;
        let mut jobs: Vec<JobRow> = self
            .jobs
            .iter()
            .filter(|j| status.map_or(true, |s| j.status == s.as_str()))
            .cloned()
            .collect();
        jobs.sort_by(|a, b| b.posted_date.cmp(&a.posted_date).then(a.id.cmp(&b.id)));
        Ok(page.apply(jobs))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }

    async fn search_jobs(&self, search: &JobSearch, page: Page) -> Result<Vec<JobRow>, AppError> {
        self.check()?;
        let contains = |haystack: &str, needle: &str| {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        };

        let mut jobs: Vec<JobRow> = self
            .jobs
            .iter()
            .filter(|j| j.status == search.status.as_str())
            .filter(|j| search.location.as_deref().map_or(true, |l| contains(&j.location, l)))
            .filter(|j| search.job_type.as_deref().map_or(true, |t| j.job_type == t))
            .filter(|j| {
                search
                    .experience_level
                    .as_deref()
                    .map_or(true, |l| j.experience_level == l)
            })
            .filter(|j| search.salary.admits(j.salary_min, j.salary_max))
            .filter(|j| {
                search
                    .text
                    .as_deref()
                    .map_or(true, |q| contains(&j.title, q) || contains(&j.company, q))
            })
            .cloned()
            .collect();

        // `Option` orders `None` first, matching NULLS FIRST / NULLS LAST.
        jobs.sort_by(|a, b| {
            let ordering = match search.sort {
                JobSortField::PostedDate => a.posted_date.cmp(&b.posted_date),
                JobSortField::SalaryMin => a.salary_min.cmp(&b.salary_min),
                JobSortField::SalaryMax => a.salary_max.cmp(&b.salary_max),
                JobSortField::Title => a.title.cmp(&b.title),
            };
            let ordering = match search.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            };
            ordering.then(a.id.cmp(&b.id))
        });
        Ok(page.apply(jobs))
    }
}
