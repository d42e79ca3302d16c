use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::extract::QueryParams;
use crate::models::job::{
    JobSortField, JobStatus, SalaryRange, SortOrder, EXPERIENCE_LEVELS, JOB_TYPES,
};
use crate::models::skill::SkillCategory;
use crate::pagination::Page;
use crate::recommendation::handlers::parse_user_id;
use crate::state::AppState;
use crate::store::{JobSearch, SkillListFilter};

const SKILLS_DEFAULT_LIMIT: usize = 50;
const JOBS_DEFAULT_LIMIT: usize = 20;
const USER_SKILLS_DEFAULT_LIMIT: usize = 50;

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::validation("INVALID_ID", "Valid ID is required"))
}

fn page(params: &QueryParams, default_limit: usize) -> Page {
    Page::from_params(params.raw("limit"), params.raw("offset"), default_limit)
}

/// GET /api/skills
///
/// `?id=` returns one skill; otherwise a page of skills filtered by
/// `category` and a case-insensitive `search` on the name.
pub async fn handle_skills(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Response, AppError> {
    if let Some(raw_id) = params.get("id") {
        let id = parse_id(raw_id)?;
        let skill = state
            .store
            .skill_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("SKILL_NOT_FOUND", "Skill not found"))?;
        return Ok(Json(skill).into_response());
    }

    let category = params
        .get("category")
        .map(|raw| {
            SkillCategory::parse(raw).ok_or_else(|| {
                let valid: Vec<&str> = SkillCategory::ALL.iter().map(|c| c.as_str()).collect();
                AppError::validation(
                    "INVALID_CATEGORY",
                    format!("Invalid category. Must be one of: {}", valid.join(", ")),
                )
            })
        })
        .transpose()?;

    let filter = SkillListFilter {
        category,
        search: params.get("search").map(str::to_string),
    };

    let skills = state
        .store
        .list_skills(&filter, page(&params, SKILLS_DEFAULT_LIMIT))
        .await?;
    Ok(Json(skills).into_response())
}

/// GET /api/jobs
///
/// `?id=` returns one job; otherwise a page of jobs, newest first,
/// optionally restricted to one `status`.
pub async fn handle_jobs(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Response, AppError> {
    if let Some(raw_id) = params.get("id") {
        let id = parse_id(raw_id)?;
        let job = state
            .store
            .job_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("JOB_NOT_FOUND", "Job not found"))?;
        return Ok(Json(job).into_response());
    }

    let status = params
        .get("status")
        .map(|raw| {
            JobStatus::parse(raw)
                .ok_or_else(|| AppError::validation("INVALID_STATUS", "Invalid status value"))
        })
        .transpose()?;

    let jobs = state
        .store
        .list_jobs(status, page(&params, JOBS_DEFAULT_LIMIT))
        .await?;
    Ok(Json(jobs).into_response())
}

/// GET /api/jobs/search
///
/// Filtered, sorted job browsing. Status defaults to `active`.
pub async fn handle_job_search(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Response, AppError> {
    let search = parse_job_search(&params)?;
    let jobs = state
        .store
        .search_jobs(&search, page(&params, JOBS_DEFAULT_LIMIT))
        .await?;
    Ok(Json(jobs).into_response())
}

/// Validates search criteria in a fixed order: job type, experience level,
/// status, sort field, sort order, then salary bounds.
fn parse_job_search(params: &QueryParams) -> Result<JobSearch, AppError> {
    let job_type = params.get("jobType");
    if let Some(t) = job_type {
        if !JOB_TYPES.contains(&t) {
            return Err(AppError::validation(
                "INVALID_JOB_TYPE",
                format!("Invalid jobType. Must be one of: {}", JOB_TYPES.join(", ")),
            ));
        }
    }

    let experience_level = params.get("experienceLevel");
    if let Some(l) = experience_level {
        if !EXPERIENCE_LEVELS.contains(&l) {
            return Err(AppError::validation(
                "INVALID_EXPERIENCE_LEVEL",
                format!(
                    "Invalid experienceLevel. Must be one of: {}",
                    EXPERIENCE_LEVELS.join(", ")
                ),
            ));
        }
    }

    let status = match params.get("status") {
        Some(raw) => JobStatus::parse(raw).ok_or_else(|| {
            AppError::validation(
                "INVALID_STATUS",
                "Invalid status. Must be one of: active, closed",
            )
        })?,
        None => JobStatus::Active,
    };

    let sort = match params.get("sort") {
        Some(raw) => JobSortField::parse(raw).ok_or_else(|| {
            let valid: Vec<&str> = JobSortField::ALL.iter().map(|f| f.as_str()).collect();
            AppError::validation(
                "INVALID_SORT_FIELD",
                format!("Invalid sort field. Must be one of: {}", valid.join(", ")),
            )
        })?,
        None => JobSortField::default(),
    };

    let order = match params.get("order") {
        Some(raw) => SortOrder::parse(raw).ok_or_else(|| {
            AppError::validation(
                "INVALID_SORT_ORDER",
                "Invalid sort order. Must be either asc or desc",
            )
        })?,
        None => SortOrder::default(),
    };

    let salary = SalaryRange {
        min: parse_salary(params.get("minSalary"), "minSalary")?,
        max: parse_salary(params.get("maxSalary"), "maxSalary")?,
    };

    Ok(JobSearch {
        status,
        location: params.get("location").map(str::to_string),
        job_type: job_type.map(str::to_string),
        experience_level: experience_level.map(str::to_string),
        salary,
        text: params.get("search").map(str::to_string),
        sort,
        order,
    })
}

fn parse_salary(raw: Option<&str>, name: &str) -> Result<Option<i32>, AppError> {
    raw.map(|v| {
        v.trim().parse::<i32>().map_err(|_| {
            AppError::validation("INVALID_SALARY", format!("{name} must be an integer"))
        })
    })
    .transpose()
}

/// GET /api/user-skills
///
/// The user's declared skills with skill names, ordered by skill id.
pub async fn handle_user_skills(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Response, AppError> {
    let user_id = parse_user_id(params.raw("userId"))?;

    let skills = state.store.user_skills(user_id).await?;
    Ok(Json(page(&params, USER_SKILLS_DEFAULT_LIMIT).apply(skills)).into_response())
}
