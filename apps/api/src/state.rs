use std::sync::Arc;

use crate::store::JobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable data collaborator. Default: `PgJobStore`.
    pub store: Arc<dyn JobStore>,
}
