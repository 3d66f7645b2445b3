use figma_client::is_valid_file_key;
use serde::{Deserialize, Serialize};

use crate::pipeline::PipelineError;

/// Body of `POST /search`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub file_key: Option<String>,
}

impl SearchRequest {
    /// Returns `(query, file_key)` once both are present and non-blank.
    pub fn require_fields(self) -> Result<(String, String), PipelineError> {
        let query = self.query.filter(|q| !q.trim().is_empty());
        let file_key = self.file_key.filter(|k| !k.trim().is_empty());
        match (query, file_key) {
            (Some(query), Some(file_key)) => {
                let file_key = file_key.trim();
                if !is_valid_file_key(file_key) {
                    return Err(PipelineError::client_input(
                        "fileKey must contain only letters, digits, '-' or '_'",
                    ));
                }
                Ok((query, file_key.to_string()))
            }
            (None, Some(_)) => Err(PipelineError::client_input("No query provided")),
            (Some(_), None) => Err(PipelineError::client_input("No fileKey provided")),
            (None, None) => Err(PipelineError::client_input(
                "query and fileKey are required",
            )),
        }
    }
}

/// One container node of the design file, flattened for the prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRecord {
    pub name: String,
    /// Descendant text-leaf contents joined by single spaces
    pub text: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub node_type: String,
    /// Direct children in the source tree
    pub child_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// A frame the model considers relevant to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub name: String,
    pub reason: String,
    pub confidence: Confidence,
}

impl SearchMatch {
    /// Placeholder match returned when the model answer cannot be used, so
    /// the plugin can render something instead of blocking.
    pub fn error_sentinel(reason: impl Into<String>) -> Self {
        Self {
            name: "Error".to_string(),
            reason: reason.into(),
            confidence: Confidence::Low,
        }
    }
}
