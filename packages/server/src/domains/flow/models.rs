use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::pipeline::PipelineError;

pub const MISSING_PAYLOAD: &str = "No diagramPayload provided";

/// Body of `POST /flow-analyze`.
///
/// The payload is kept untyped until `DiagramPayload::from_value` so that a
/// missing payload and a malformed one produce different client errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlowAnalyzeRequest {
    #[serde(rename = "diagramPayload", default)]
    pub diagram_payload: Option<Value>,
}

/// Steps, connectors and free text exported from a user-journey diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramPayload {
    pub steps: Vec<Step>,
    pub connectors: Vec<Connector>,
    pub free_text: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(deserialize_with = "string_or_number")]
    pub step_id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_blurb: Option<String>,
}

/// Directed edge between two steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    #[serde(deserialize_with = "string_or_number")]
    pub from: String,
    #[serde(deserialize_with = "string_or_number")]
    pub to: String,
}

impl DiagramPayload {
    /// Validate an untyped request payload.
    ///
    /// `null` counts as absent. Each of `steps`, `connectors` and `freeText`
    /// must be an array.
    pub fn from_value(value: Option<Value>) -> Result<Self, PipelineError> {
        let value = match value {
            None | Some(Value::Null) => return Err(PipelineError::client_input(MISSING_PAYLOAD)),
            Some(value) => value,
        };

        let object = value
            .as_object()
            .ok_or_else(|| PipelineError::client_input("diagramPayload must be an object"))?;

        for field in ["steps", "connectors", "freeText"] {
            match object.get(field) {
                Some(Value::Array(_)) => {}
                _ => {
                    return Err(PipelineError::client_input(format!(
                        "diagramPayload.{} must be an array",
                        field
                    )))
                }
            }
        }

        serde_json::from_value(value).map_err(|e| {
            PipelineError::client_input(format!("Invalid diagramPayload: {}", e))
        })
    }
}

/// Ids arrive as strings from the plugin but older exports used numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
