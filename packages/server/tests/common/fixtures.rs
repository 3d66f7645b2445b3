//! Test fixtures: design documents and diagram payloads.

use figma_client::{BoundingBox, Node};
use serde_json::{json, Value};

pub fn text(chars: &str) -> Node {
    Node::new("TEXT").with_characters(chars)
}

pub fn frame(name: &str) -> Node {
    Node::new("FRAME").named(name)
}

/// Document with a welcome screen, a login screen and a loose text node.
pub fn onboarding_document() -> Node {
    Node::new("DOCUMENT").with_child(
        Node::new("CANVAS")
            .named("Page 1")
            .with_child(
                frame("Welcome")
                    .with_bounds(BoundingBox {
                        x: Some(0.0),
                        y: Some(0.0),
                        width: Some(375.0),
                        height: Some(812.0),
                    })
                    .with_child(text("Let's go")),
            )
            .with_child(
                frame("Login")
                    .with_child(text("Email"))
                    .with_child(Node::new("GROUP").with_child(text("Password")))
                    .with_child(Node::new("RECTANGLE").named("Submit button")),
            )
            .with_child(text("Scratch note")),
    )
}

pub fn diagram_payload() -> Value {
    json!({
        "steps": [
            {"stepId": "1:1", "label": "Open app", "goalBlurb": "Order dinner fast"},
            {"stepId": "1:2", "label": "Browse restaurants"},
            {"stepId": "1:3", "label": "Checkout"}
        ],
        "connectors": [
            {"from": "1:1", "to": "1:2"},
            {"from": "1:2", "to": "1:3"}
        ],
        "freeText": ["Many users abandon at checkout"]
    })
}

pub fn flow_analysis_answer() -> Value {
    json!({
        "context": "Food-delivery app ordering",
        "goal": "Order dinner fast",
        "subGoal": "Discover new restaurants",
        "extractedKeywords": ["food", "delivery", "restaurant"],
        "overview": "Hungry users want to order quickly.",
        "steps": [
            {
                "stepId": "1:3",
                "label": "Checkout",
                "pain": "Unexpected fees",
                "suggestion": "Show fees upfront",
                "principle": {"name": "Transparency", "blurb": "Avoid surprises"},
                "severity": "high"
            }
        ],
        "keyTakeaways": [{"message": "Reduce checkout friction", "severity": "medium"}]
    })
}
