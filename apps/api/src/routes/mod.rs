pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route("/api/v1/posts/generate", post(handlers::handle_generate))
        .route("/api/v1/posts/normalize", post(handlers::handle_normalize))
        .route(
            "/api/v1/trending/:category",
            get(handlers::handle_trending),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::generation::models::{count_words, WordBand};
    use crate::generation::normalizer::Normalizer;
    use crate::generation::trending::RotatingTrends;

    fn test_state() -> AppState {
        let config = Config {
            port: 0,
            rust_log: "debug".to_string(),
            trim_margin: 10,
            large_deficit: 15,
            variations_per_request: 3,
        };
        AppState {
            normalizer: Normalizer::new(config.normalizer_settings()),
            config,
            trending: Arc::new(RotatingTrends::new(120)),
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "postsmith-api");
    }

    #[tokio::test]
    async fn test_list_templates() {
        let (status, body) =
            send(Request::get("/api/v1/templates").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        let templates = body.as_array().unwrap();
        assert_eq!(templates.len(), 8);
        assert_eq!(templates[0]["variant"], "Story");
    }

    #[tokio::test]
    async fn test_generate_returns_posts_in_band() {
        let (status, body) = send(post_json(
            "/api/v1/posts/generate",
            json!({
                "topic": "AI",
                "category": "Technology",
                "tone": "Professional",
                "template_variant": "List",
                "target_band": "Short",
                "include_emoji": false,
                "use_trending_context": false,
                "seed": 42
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let posts = body["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 3);
        for post in posts {
            let content = post["content"].as_str().unwrap();
            assert!(WordBand::Short.contains(count_words(content)));
            assert!(content.ends_with("#Technology #AI #Tips #Lessons"));
            assert_eq!(post["within_band"], true);
        }
        assert!(body["generation_id"].is_string());
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_topic() {
        let (status, body) = send(post_json(
            "/api/v1/posts/generate",
            json!({ "topic": "  ", "category": "Technology" }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "topic must not be empty");
    }

    #[tokio::test]
    async fn test_normalize_leaves_in_band_text_alone() {
        let words: Vec<String> = (0..70).map(|i| format!("w{i}")).collect();
        let content = format!("{}\n\n#Rust #Systems", words.join(" "));
        let (status, body) = send(post_json(
            "/api/v1/posts/normalize",
            json!({ "content": content, "target_band": "Short" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content"], content);
        assert_eq!(body["changed"], false);
        assert_eq!(body["original_word_count"], 72);
    }

    #[tokio::test]
    async fn test_normalize_trims_long_text() {
        let words: Vec<String> = (0..250).map(|i| format!("w{i}")).collect();
        let content = format!("{}\n\n#Rust #Systems", words.join(" "));
        let (status, body) = send(post_json(
            "/api/v1/posts/normalize",
            json!({ "content": content, "target_band": "Medium (100-200 words)" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changed"], true);
        assert_eq!(body["stats"]["word_count"], 192);
        assert!(body["content"].as_str().unwrap().ends_with("\n\n#Rust #Systems"));
    }

    #[tokio::test]
    async fn test_normalize_rejects_empty_content() {
        let (status, _) = send(post_json(
            "/api/v1/posts/normalize",
            json!({ "content": "   " }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_trending_window_for_known_category() {
        let (status, body) = send(
            Request::get("/api/v1/trending/Finance")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "Finance");
        assert_eq!(body["topics"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_trending_unknown_category_is_404() {
        let (status, body) = send(
            Request::get("/api/v1/trending/Agriculture")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
