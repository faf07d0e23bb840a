//! Combined pipeline — recommendation stage, then description stage.
//!
//! Flow: GameQuery → RecommendationStage → titles_text
//!       titles_text → DescriptionStage → descriptions_text
//!
//! The description stage only ever sees the exact titles text. There is no
//! partial result: if either stage fails, the whole run fails.

use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::ModelClient;
use crate::recommendation::models::{GameQuery, RecommendationResult};
use crate::recommendation::stages::{DescriptionStage, RecommendationStage, Stage};

pub struct RecommendationPipeline {
    recommend: RecommendationStage,
    describe: DescriptionStage,
}

impl RecommendationPipeline {
    /// Both stages share the same injected model client.
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self {
            recommend: RecommendationStage::new(model.clone()),
            describe: DescriptionStage::new(model),
        }
    }

    pub async fn run(&self, query: &GameQuery) -> Result<RecommendationResult, AppError> {
        let titles_text = self.recommend.run(query).await?;
        info!("Titles received ({} bytes)", titles_text.len());

        let descriptions_text = self.describe.run(&titles_text).await?;
        info!("Descriptions received ({} bytes)", descriptions_text.len());

        Ok(RecommendationResult {
            titles_text,
            descriptions_text,
        })
    }
}
