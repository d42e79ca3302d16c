//! Recommendation engine — ranks active jobs against a user's declared skills.
//!
//! Pure and deterministic: callers fetch the inputs through a `JobStore` and
//! hand them over; nothing here touches I/O or shared state.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::job::{JobRow, JobSkillRequirement};
use crate::models::skill::UserSkill;
use crate::recommendation::proficiency::Proficiency;

const MAX_SCORE: f64 = 100.0;
const REQUIRED_BONUS_MAX: f64 = 20.0;
const PROFICIENCY_BONUS_MAX: f64 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// A job skill the user also declared.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingSkill {
    pub skill_id: i64,
    pub skill_name: String,
    pub required: bool,
    pub user_proficiency: String, // echoed as stored, even if unrecognised
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub job: JobRow,
    pub match_score: f64, // (0, 100], two decimals
    pub matching_skills: Vec<MatchingSkill>,
    pub total_required_skills: u32,
    pub matched_required_skills: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking
// ────────────────────────────────────────────────────────────────────────────

/// Scores every candidate job and returns the full ranking, best first.
///
/// Jobs without any skill rows, or without a single skill in common with the
/// user, are left out. Equal scores keep the order of `jobs`.
pub fn rank_jobs(
    user_skills: &[UserSkill],
    jobs: Vec<JobRow>,
    requirements: &[JobSkillRequirement],
) -> Vec<Recommendation> {
    // Later rows win for duplicate (user, skill) pairs.
    let proficiency_by_skill: HashMap<i64, &str> = user_skills
        .iter()
        .map(|us| (us.skill_id, us.proficiency_level.as_str()))
        .collect();

    let requirements_by_job = group_by_job(requirements);

    let mut recommendations: Vec<Recommendation> = jobs
        .into_iter()
        .filter_map(|job| {
            let job_skills = requirements_by_job.get(&job.id)?;
            evaluate_job(job, job_skills, &proficiency_by_skill)
        })
        .collect();

    // `sort_by` is stable, so ties keep candidate order.
    recommendations.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    recommendations
}

/// Groups requirements by job id, keeping fetch order within each job.
fn group_by_job(requirements: &[JobSkillRequirement]) -> HashMap<i64, Vec<&JobSkillRequirement>> {
    let mut grouped: HashMap<i64, Vec<&JobSkillRequirement>> = HashMap::new();
    for req in requirements {
        grouped.entry(req.job_id).or_default().push(req);
    }
    grouped
}

fn evaluate_job(
    job: JobRow,
    job_skills: &[&JobSkillRequirement],
    proficiency_by_skill: &HashMap<i64, &str>,
) -> Option<Recommendation> {
    if job_skills.is_empty() {
        return None;
    }

    let mut matching_skills = Vec::new();
    let mut total_required_skills = 0_u32;
    let mut matched_required_skills = 0_u32;

    for js in job_skills {
        if js.required {
            total_required_skills += 1;
        }

        if let Some(level) = proficiency_by_skill.get(&js.skill_id) {
            matching_skills.push(MatchingSkill {
                skill_id: js.skill_id,
                skill_name: js.skill_name.clone(),
                required: js.required,
                user_proficiency: (*level).to_string(),
            });
            if js.required {
                matched_required_skills += 1;
            }
        }
    }

    if matching_skills.is_empty() {
        return None;
    }

    let match_score = compute_match_score(
        job_skills.len(),
        total_required_skills,
        matched_required_skills,
        &matching_skills,
    );

    Some(Recommendation {
        job,
        match_score,
        matching_skills,
        total_required_skills,
        matched_required_skills,
    })
}

/// match = base + required bonus + proficiency bonus, capped at 100 and
/// rounded to two decimals.
///
/// - base: matched / all job skills × 100 (optional skills count too)
/// - required bonus: matched required / total required × 20, or 0 without required skills
/// - proficiency bonus: mean proficiency weight / 4 × 10
///
/// `matching_skills` must be non-empty.
pub fn compute_match_score(
    total_job_skills: usize,
    total_required_skills: u32,
    matched_required_skills: u32,
    matching_skills: &[MatchingSkill],
) -> f64 {
    let base_score = (matching_skills.len() as f64 / total_job_skills as f64) * 100.0;

    let required_bonus = if total_required_skills > 0 {
        (matched_required_skills as f64 / total_required_skills as f64) * REQUIRED_BONUS_MAX
    } else {
        0.0
    };

    let weight_sum: u32 = matching_skills
        .iter()
        .map(|s| u32::from(Proficiency::weight_of(&s.user_proficiency)))
        .sum();
    let avg_proficiency = weight_sum as f64 / matching_skills.len() as f64;
    let proficiency_bonus = (avg_proficiency / 4.0) * PROFICIENCY_BONUS_MAX;

    let capped = (base_score + required_bonus + proficiency_bonus).min(MAX_SCORE);
    round_to_cents(capped)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
