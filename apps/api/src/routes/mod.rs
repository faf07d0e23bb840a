pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/recommendations", post(handlers::handle_recommend))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::testing::ScriptedModel;
    use crate::recommendation::pipeline::RecommendationPipeline;

    fn app(model: &Arc<ScriptedModel>) -> Router {
        build_router(AppState {
            pipeline: Arc::new(RecommendationPipeline::new(model.clone())),
        })
    }

    fn recommend_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/recommendations")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_recommend_returns_both_texts() {
        let model = Arc::new(
            ScriptedModel::new()
                .reply("1. A\n2. B")
                .reply("**A**: x\n**B**: y"),
        );

        let response = app(&model)
            .oneshot(recommend_request(
                json!({"genre": "RPG", "reference_title": "Dark Souls"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["titles_text"], "1. A\n2. B");
        assert_eq!(body["descriptions_text"], "**A**: x\n**B**: y");
        assert!(body["request_id"].as_str().is_some());
        assert_eq!(model.call_count(), 2);
    }

    #[tokio::test]
    async fn test_reference_title_is_optional() {
        let model = Arc::new(ScriptedModel::new().reply("1. A").reply("**A**: x"));

        let response = app(&model)
            .oneshot(recommend_request(json!({"genre": "Strategy"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(!model.prompts()[0].contains("similar to"));
    }

    #[tokio::test]
    async fn test_empty_genre_never_reaches_model() {
        let model = Arc::new(ScriptedModel::new().reply("unused"));

        let response = app(&model)
            .oneshot(recommend_request(json!({"genre": "  ", "reference_title": "Zelda"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_genre_is_validation_error() {
        let model = Arc::new(ScriptedModel::new().reply("unused"));

        let response = app(&model)
            .oneshot(recommend_request(json!({"reference_title": "Zelda"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["hint"].as_str().is_some());
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_gets_error_envelope() {
        let model = Arc::new(ScriptedModel::new().reply("unused"));

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/recommendations")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("genre=RPG"))
            .unwrap();
        let response = app(&model).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_stage_failure_surfaces_single_generic_error() {
        let model = Arc::new(ScriptedModel::new().reply("1. A").fail(500, "boom"));

        let response = app(&model)
            .oneshot(recommend_request(json!({"genre": "Action"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "LLM_ERROR");
        assert!(body.get("titles_text").is_none());
        assert!(body["error"]["hint"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let model = Arc::new(ScriptedModel::new());

        let response = app(&model)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "gamerec");
    }

    #[tokio::test]
    async fn test_index_serves_dashboard() {
        let model = Arc::new(ScriptedModel::new());

        let response = app(&model)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Game Recommendation Engine"));
        assert!(html.contains("/api/v1/recommendations"));
    }

    #[tokio::test]
    async fn test_dashboard_clears_panels_before_each_search() {
        let model = Arc::new(ScriptedModel::new());

        let response = app(&model)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        let reset = html.find("resetNotices();\n").unwrap();
        let fetch = html.find("await fetch(").unwrap();
        let clear_games = html.find(r#"$("games").innerHTML = "";"#).unwrap();
        let clear_descriptions = html.find(r#"$("descriptions").innerHTML = "";"#).unwrap();
        assert!(reset < clear_games && clear_games < fetch);
        assert!(reset < clear_descriptions && clear_descriptions < fetch);
    }
}
