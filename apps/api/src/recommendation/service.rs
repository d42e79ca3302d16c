use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::job::JobFilters;
use crate::pagination::Page;
use crate::recommendation::engine::{rank_jobs, Recommendation};
use crate::store::JobStore;

pub const NO_SKILLS_MESSAGE: &str =
    "No skills found for this user. Please add skills to get job recommendations.";

/// A validated recommendation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub user_id: i64,
    pub filters: JobFilters,
    pub page: Page,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationOutcome {
    /// The user has not declared any skill.
    NoSkills,
    /// No active job passed the filters.
    NoActiveJobs,
    Ranked(Vec<Recommendation>),
}

/// Fetches the inputs for one user and ranks the candidate jobs.
///
/// User skills and active jobs are independent and fetched together; job
/// skills need the job ids and follow. Any store failure aborts the request.
pub async fn recommend_for_user(
    store: &dyn JobStore,
    request: &RecommendationRequest,
) -> Result<RecommendationOutcome, AppError> {
    let (user_skills, jobs) = tokio::try_join!(
        store.user_skills(request.user_id),
        store.active_jobs(&request.filters),
    )?;

    if user_skills.is_empty() {
        debug!("User {} has no skills", request.user_id);
        return Ok(RecommendationOutcome::NoSkills);
    }

    if jobs.is_empty() {
        return Ok(RecommendationOutcome::NoActiveJobs);
    }

    let job_ids: Vec<i64> = jobs.iter().map(|j| j.id).collect();
    let requirements = store.job_skills_for_jobs(&job_ids).await?;

    let candidate_count = jobs.len();
    let ranked = rank_jobs(&user_skills, jobs, &requirements);
    let matched_count = ranked.len();
    let page = request.page.apply(ranked);

    info!(
        "Recommendations for user {}: {} candidates, {} matched, {} returned",
        request.user_id,
        candidate_count,
        matched_count,
        page.len()
    );

    Ok(RecommendationOutcome::Ranked(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{sample_job, MemoryJobStore};

    fn store() -> MemoryJobStore {
        MemoryJobStore::default()
            .with_skill(2, "JavaScript", "technical")
            .with_skill(11, "React", "technical")
            .with_skill(12, "Node.js", "technical")
            .with_skill(1, "Python", "technical")
            .with_job(sample_job(1, "Full Stack", "senior", "full-time"))
            .with_job(sample_job(2, "Frontend", "mid", "full-time"))
            .with_job(sample_job(3, "Backend", "mid", "contract"))
            .with_job(sample_job(4, "JS Intern", "entry", "internship"))
            .with_job_skill(1, 2, true)
            .with_job_skill(1, 11, true)
            .with_job_skill(1, 12, true)
            .with_job_skill(2, 2, true)
            .with_job_skill(3, 1, true)
            .with_job_skill(4, 2, false)
            .with_job_skill(4, 12, false)
            .with_user_skill(7, 2, "intermediate")
            .with_user_skill(7, 11, "beginner")
    }

    fn request(user_id: i64) -> RecommendationRequest {
        RecommendationRequest {
            user_id,
            filters: JobFilters::default(),
            page: Page {
                limit: 20,
                offset: 0,
            },
        }
    }

    fn ids(outcome: &RecommendationOutcome) -> Vec<i64> {
        match outcome {
            RecommendationOutcome::Ranked(recs) => recs.iter().map(|r| r.job.id).collect(),
            other => panic!("expected ranked outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_user_without_skills_gets_no_skills_outcome() {
        let outcome = recommend_for_user(&store(), &request(99)).await.unwrap();
        assert_eq!(outcome, RecommendationOutcome::NoSkills);
    }

    #[tokio::test]
    async fn test_ranks_all_matching_jobs() {
        let outcome = recommend_for_user(&store(), &request(7)).await.unwrap();
        // Job 2 caps at 100, job 1 is 83.75, job 4 is 55; job 3 has no overlap.
        assert_eq!(ids(&outcome), vec![2, 1, 4]);
    }

    #[tokio::test]
    async fn test_filters_combine() {
        let mut req = request(7);
        req.filters.experience_level = Some("mid".to_string());
        assert_eq!(ids(&recommend_for_user(&store(), &req).await.unwrap()), vec![2]);

        req.filters.job_type = Some("contract".to_string());
        // Job 3 is the only candidate and shares no skill with the user.
        assert_eq!(
            recommend_for_user(&store(), &req).await.unwrap(),
            RecommendationOutcome::Ranked(vec![])
        );

        req.filters.experience_level = None;
        req.filters.job_type = Some("internship".to_string());
        assert_eq!(ids(&recommend_for_user(&store(), &req).await.unwrap()), vec![4]);
    }

    #[tokio::test]
    async fn test_no_active_jobs_outcome() {
        let mut req = request(7);
        req.filters.job_type = Some("part-time".to_string());
        let outcome = recommend_for_user(&store(), &req).await.unwrap();
        assert_eq!(outcome, RecommendationOutcome::NoActiveJobs);
    }

    #[tokio::test]
    async fn test_closed_jobs_are_not_candidates() {
        let mut closed = sample_job(5, "Closed JS", "mid", "full-time");
        closed.status = "closed".to_string();
        let store = store().with_job(closed).with_job_skill(5, 2, true);

        let outcome = recommend_for_user(&store, &request(7)).await.unwrap();
        assert!(!ids(&outcome).contains(&5));
    }

    #[tokio::test]
    async fn test_pagination_applies_after_ranking() {
        let mut req = request(7);
        req.page = Page {
            limit: 1,
            offset: 1,
        };
        assert_eq!(ids(&recommend_for_user(&store(), &req).await.unwrap()), vec![1]);

        req.page = Page {
            limit: 5,
            offset: 10,
        };
        assert!(ids(&recommend_for_user(&store(), &req).await.unwrap()).is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = store().failing("connection refused");
        let err = recommend_for_user(&store, &request(7)).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert!(err.to_string().contains("connection refused"));
    }
}
