//! Test harness driving the real router with mock collaborators.
//!
//! Requests go through `tower::ServiceExt::oneshot`, so no socket is bound.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use design_assist_core::kernel::{MockAI, MockDocumentSource, TestDependencies};
use design_assist_core::server::build_app;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestHarness {
    pub ai: MockAI,
    pub documents: MockDocumentSource,
    router: Router,
}

/// Response status plus the body parsed as JSON (`Value::Null` if it isn't JSON).
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestHarness {
    pub fn new(ai: MockAI, documents: MockDocumentSource) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let deps = TestDependencies::new()
            .mock_ai(ai.clone())
            .mock_documents(documents.clone());

        Self {
            ai,
            documents,
            router: build_app(deps.server_deps()),
        }
    }

    pub fn with_ai(ai: MockAI) -> Self {
        Self::new(ai, MockDocumentSource::new())
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> TestResponse {
        self.post_raw(path, &body.to_string(), Some("application/json"))
            .await
    }

    pub async fn post_raw(&self, path: &str, body: &str, content_type: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(Method::POST).uri(path);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();
        self.send(request).await
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8_lossy(&bytes).to_string();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}
