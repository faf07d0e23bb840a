use std::sync::Arc;

use crate::recommendation::pipeline::RecommendationPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the model client handle built in `main`; read-only for the process lifetime.
    pub pipeline: Arc<RecommendationPipeline>,
}
