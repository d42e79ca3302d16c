pub mod health;

use axum::{routing::get, Router};

use crate::catalog::handlers as catalog;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/jobs/recommended",
            get(recommendation::handle_recommended_jobs),
        )
        .route("/api/jobs/search", get(catalog::handle_job_search))
        .route("/api/jobs", get(catalog::handle_jobs))
        .route("/api/skills", get(catalog::handle_skills))
        .route("/api/user-skills", get(catalog::handle_user_skills))
        .with_state(state)
}
