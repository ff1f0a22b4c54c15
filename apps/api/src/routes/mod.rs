pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::cv::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/process_cv", post(handlers::handle_process_cv))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// The router as served: HTTP tracing plus unrestricted cross-origin access.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::{CompletionProvider, CompletionRequest, LlmError};

    struct NeverCalled;

    #[async_trait]
    impl CompletionProvider for NeverCalled {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn state(max_upload_bytes: usize) -> AppState {
        AppState {
            llm: Arc::new(NeverCalled),
            config: Config {
                openai_api_key: "sk-test".to_string(),
                openai_org_id: None,
                openai_base_url: "http://127.0.0.1:9".to_string(),
                llm_timeout_secs: 5,
                max_upload_bytes,
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_health() {
        let response = build_app(state(1024))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "cv-api");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/process_cv")
            .header(header::ORIGIN, "https://example.org")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = build_app(state(1024)).oneshot(request).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_oversized_upload_is_internal_error() {
        let boundary = "limit-boundary";
        let mut body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"cv.txt\"\r\n\r\n"
        )
        .into_bytes();
        body.extend(std::iter::repeat(b'a').take(4096));
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/process_cv")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = build_router(state(1024)).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
