// Job recommendations: skill-overlap scoring over active jobs.
// The engine is pure; the service fetches its inputs through `JobStore`.

pub mod engine;
pub mod handlers;
pub mod proficiency;
pub mod service;
