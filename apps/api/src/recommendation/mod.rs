// Game recommendation: genre (+ optional reference title) → five titles → descriptions.
// All model calls go through llm_client::ModelClient — stages never build HTTP requests.

pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod stages;
