//! Pipeline stages — one prompt, one model call, raw text out.
//!
//! Each stage implements `Stage` so it can be driven and tested on its own.
//! Neither stage parses what the model returns.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::ModelClient;
use crate::recommendation::models::GameQuery;
use crate::recommendation::prompts::{
    DESCRIBE_PROMPT_TEMPLATE, RECOMMEND_PROMPT_TEMPLATE, REFERENCE_CLAUSE_TEMPLATE,
};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A unit of work taking one input and producing one output.
#[async_trait]
pub trait Stage: Send + Sync {
    type Input: ?Sized + Sync;
    type Output: Send;

    async fn run(&self, input: &Self::Input) -> Result<Self::Output, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt builders
// ────────────────────────────────────────────────────────────────────────────

/// Builds the title recommendation prompt. Without a reference title the
/// "similar to" clause is left out entirely.
pub fn build_recommend_prompt(query: &GameQuery) -> String {
    let reference_clause = query
        .reference_title()
        .map(|r| REFERENCE_CLAUSE_TEMPLATE.replace("{reference}", r))
        .unwrap_or_default();

    RECOMMEND_PROMPT_TEMPLATE
        .replace("{reference_clause}", &reference_clause)
        .replace("{genre}", query.genre())
}

/// Builds the description prompt around the verbatim titles text.
pub fn build_describe_prompt(titles_text: &str) -> String {
    DESCRIBE_PROMPT_TEMPLATE.replace("{games}", titles_text)
}

// ────────────────────────────────────────────────────────────────────────────
// Stages
// ────────────────────────────────────────────────────────────────────────────

/// Stage 1: genre (+ optional reference) → numbered list of five titles.
pub struct RecommendationStage {
    model: Arc<dyn ModelClient>,
}

impl RecommendationStage {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl Stage for RecommendationStage {
    type Input = GameQuery;
    type Output = String;

    async fn run(&self, query: &GameQuery) -> Result<String, AppError> {
        info!(
            "Requesting titles: genre={:?}, reference={:?}",
            query.genre(),
            query.reference_title()
        );
        let prompt = build_recommend_prompt(query);
        self.model
            .complete(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Title recommendation failed: {e}")))
    }
}

/// Stage 2: titles text → one `**Title**: description` line per title.
pub struct DescriptionStage {
    model: Arc<dyn ModelClient>,
}

impl DescriptionStage {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl Stage for DescriptionStage {
    type Input = str;
    type Output = String;

    async fn run(&self, titles_text: &str) -> Result<String, AppError> {
        info!("Requesting descriptions for {} title lines", titles_text.lines().count());
        let prompt = build_describe_prompt(titles_text);
        self.model
            .complete(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Description generation failed: {e}")))
    }
}
