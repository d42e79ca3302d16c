//! Axum route handler for job recommendations.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::extract::QueryParams;
use crate::models::job::JobFilters;
use crate::pagination::Page;
use crate::recommendation::engine::Recommendation;
use crate::recommendation::service::{
    recommend_for_user, RecommendationOutcome, RecommendationRequest, NO_SKILLS_MESSAGE,
};
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 20;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendationResponse {
    NoSkills {
        message: String,
        recommendations: Vec<Recommendation>,
    },
    Ranked(Vec<Recommendation>),
}

impl From<RecommendationOutcome> for RecommendationResponse {
    fn from(outcome: RecommendationOutcome) -> Self {
        match outcome {
            RecommendationOutcome::NoSkills => RecommendationResponse::NoSkills {
                message: NO_SKILLS_MESSAGE.to_string(),
                recommendations: vec![],
            },
            RecommendationOutcome::NoActiveJobs => RecommendationResponse::Ranked(vec![]),
            RecommendationOutcome::Ranked(recs) => RecommendationResponse::Ranked(recs),
        }
    }
}

impl IntoResponse for RecommendationResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl TryFrom<&QueryParams> for RecommendationRequest {
    type Error = AppError;

    fn try_from(params: &QueryParams) -> Result<Self, Self::Error> {
        let user_id = parse_user_id(params.raw("userId"))?;
        let page = Page::from_params(params.raw("limit"), params.raw("offset"), DEFAULT_LIMIT);

        Ok(RecommendationRequest {
            user_id,
            filters: JobFilters {
                experience_level: params.get("experienceLevel").map(str::to_string),
                job_type: params.get("jobType").map(str::to_string),
            },
            page,
        })
    }
}

/// Parses a required, strictly positive integer user id.
pub fn parse_user_id(raw: Option<&str>) -> Result<i64, AppError> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::validation("INVALID_USER_ID", "Valid userId is required"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/jobs/recommended
///
/// Ranks active jobs by how well they match the user's declared skills.
pub async fn handle_recommended_jobs(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<RecommendationResponse, AppError> {
    let request = RecommendationRequest::try_from(&params)?;
    let outcome = recommend_for_user(state.store.as_ref(), &request).await?;
    Ok(outcome.into())
}
