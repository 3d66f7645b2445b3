//! Integration tests for POST /flow-analyze, GET / and GET /health.

mod common;

use axum::http::StatusCode;
use common::*;
use design_assist_core::kernel::MockAI;
use serde_json::json;

#[tokio::test]
async fn flow_analysis_returns_model_object() {
    let answer = flow_analysis_answer();
    let ai = MockAI::new().with_response(&format!("```json\n{}\n```", answer));
    let harness = TestHarness::with_ai(ai);

    let response = harness
        .post_json("/flow-analyze", &json!({"diagramPayload": diagram_payload()}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, answer);
}

#[tokio::test]
async fn flow_prompt_lists_steps_connectors_and_notes() {
    let ai = MockAI::new().with_response(&flow_analysis_answer().to_string());
    let harness = TestHarness::with_ai(ai);

    harness
        .post_json("/flow-analyze", &json!({"diagramPayload": diagram_payload()}))
        .await;

    let calls = harness.ai.calls();
    assert_eq!(calls.len(), 1);
    let content = &calls[0].content;
    assert!(content.contains("Browse restaurants"));
    assert!(content.contains("1:1"));
    assert!(content.contains("Many users abandon at checkout"));
    assert!((calls[0].options.temperature - 0.2).abs() < f32::EPSILON);
    assert_eq!(calls[0].options.max_output_tokens, 1000);
}

#[tokio::test]
async fn missing_payload_is_bad_request() {
    let harness = TestHarness::with_ai(MockAI::new());

    for body in [json!({}), json!({"diagramPayload": null})] {
        let response = harness.post_json("/flow-analyze", &body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, json!({"error": "No diagramPayload provided"}));
    }

    assert_eq!(harness.ai.call_count(), 0);
}

#[tokio::test]
async fn empty_body_reports_missing_payload() {
    let harness = TestHarness::with_ai(MockAI::new());

    for content_type in [None, Some("application/json"), Some("text/plain")] {
        let response = harness.post_raw("/flow-analyze", "", content_type).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{:?}", content_type);
        assert_eq!(response.body, json!({"error": "No diagramPayload provided"}));
    }

    assert_eq!(harness.ai.call_count(), 0);
}

#[tokio::test]
async fn non_array_field_is_bad_request() {
    let harness = TestHarness::with_ai(MockAI::new());

    let response = harness
        .post_json(
            "/flow-analyze",
            &json!({"diagramPayload": {"steps": [], "connectors": "nope", "freeText": []}}),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({"error": "diagramPayload.connectors must be an array"})
    );
    assert_eq!(harness.ai.call_count(), 0);
}

#[tokio::test]
async fn array_answer_is_bad_gateway() {
    let ai = MockAI::new().with_response("[1, 2, 3]");
    let harness = TestHarness::with_ai(ai);

    let response = harness
        .post_json("/flow-analyze", &json!({"diagramPayload": diagram_payload()}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.body,
        json!({"error": "Unexpected response shape from LLM, please retry."})
    );
}

#[tokio::test]
async fn unreadable_answer_is_bad_gateway() {
    let ai = MockAI::new().with_response("I think the flow looks fine overall.");
    let harness = TestHarness::with_ai(ai);

    let response = harness
        .post_json("/flow-analyze", &json!({"diagramPayload": diagram_payload()}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.body, json!({"error": "Invalid JSON from LLM, please retry."}));
    assert!(!response.text.contains("looks fine"));
}

#[tokio::test]
async fn model_failure_is_bad_gateway() {
    let ai = MockAI::new().with_error(429, "rate limited");
    let harness = TestHarness::with_ai(ai);

    let response = harness
        .post_json("/flow-analyze", &json!({"diagramPayload": diagram_payload()}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.body, json!({"error": "LLM analysis failed, please retry."}));
}

#[tokio::test]
async fn malformed_json_body_gets_json_error() {
    let harness = TestHarness::with_ai(MockAI::new());

    let response = harness
        .post_raw("/flow-analyze", "not json", Some("application/json"))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"].is_string());
    assert_eq!(harness.ai.call_count(), 0);
}

#[tokio::test]
async fn root_and_health_routes_respond() {
    let harness = TestHarness::with_ai(MockAI::new());

    let root = harness.get("/").await;
    assert_eq!(root.status, StatusCode::OK);
    assert_eq!(root.text, "Hello from Design Assist!");

    let health = harness.get("/health").await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body, json!({"status": "healthy"}));
}
