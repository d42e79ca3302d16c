use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub job_type: String,         // full-time | part-time | internship | contract
    pub experience_level: String, // entry | mid | senior
    pub posted_date: DateTime<Utc>,
    pub application_deadline: Option<DateTime<Utc>>,
    pub status: String, // active | closed
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A job's skill requirement joined with the skill name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobSkillRequirement {
    pub job_id: i64,
    pub skill_id: i64,
    pub required: bool,
    pub skill_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Active,
    Closed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 2] = [JobStatus::Active, JobStatus::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Closed => "closed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Equality filters applied when loading recommendation candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilters {
    pub experience_level: Option<String>,
    pub job_type: Option<String>,
}

pub const JOB_TYPES: [&str; 4] = ["full-time", "part-time", "internship", "contract"];
pub const EXPERIENCE_LEVELS: [&str; 3] = ["entry", "mid", "senior"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobSortField {
    #[default]
    PostedDate,
    SalaryMin,
    SalaryMax,
    Title,
}

impl JobSortField {
    pub const ALL: [JobSortField; 4] = [
        JobSortField::PostedDate,
        JobSortField::SalaryMin,
        JobSortField::SalaryMax,
        JobSortField::Title,
    ];

    /// Query-string name.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobSortField::PostedDate => "postedDate",
            JobSortField::SalaryMin => "salaryMin",
            JobSortField::SalaryMax => "salaryMax",
            JobSortField::Title => "title",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            JobSortField::PostedDate => "posted_date",
            JobSortField::SalaryMin => "salary_min",
            JobSortField::SalaryMax => "salary_max",
            JobSortField::Title => "title",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    /// Ascending puts missing values first, descending puts them last.
    pub fn sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC NULLS FIRST",
            SortOrder::Desc => "DESC NULLS LAST",
        }
    }
}

/// Requested salary bounds for job search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl SalaryRange {
    /// With both bounds a job qualifies when either end of its band falls
    /// inside the range or its band spans the whole range. With one bound only
    /// the opposite end of the band is compared. Missing job salaries never match
    /// a comparison.
    pub fn admits(&self, salary_min: Option<i32>, salary_max: Option<i32>) -> bool {
        let within = |v: Option<i32>, lo: i32, hi: i32| v.map_or(false, |v| v >= lo && v <= hi);

        match (self.min, self.max) {
            (None, None) => true,
            (Some(lo), Some(hi)) => {
                within(salary_min, lo, hi)
                    || within(salary_max, lo, hi)
                    || matches!((salary_min, salary_max), (Some(a), Some(b)) if a <= lo && b >= hi)
            }
            (Some(lo), None) => salary_max.map_or(false, |b| b >= lo),
            (None, Some(hi)) => salary_min.map_or(false, |a| a <= hi),
        }
    }
}
