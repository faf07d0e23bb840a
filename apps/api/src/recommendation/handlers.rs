//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::recommendation::models::GameQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub reference_title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub request_id: Uuid,
    pub titles_text: String,
    pub descriptions_text: String,
}

/// POST /api/v1/recommendations
///
/// Runs the two-stage pipeline. An empty or missing genre, or a body that is
/// not valid JSON, is rejected before any model call.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<RecommendResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let query = GameQuery::new(&request.genre, request.reference_title.as_deref())?;

    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("recommend", %request_id);

    let result = state.pipeline.run(&query).instrument(span.clone()).await?;
    span.in_scope(|| info!("Recommendations generated"));

    Ok(Json(RecommendResponse {
        request_id,
        titles_text: result.titles_text,
        descriptions_text: result.descriptions_text,
    }))
}
