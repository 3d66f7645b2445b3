//! Typed errors for the request pipeline.
//!
//! Every variant is terminal for the request that raised it. The HTTP layer
//! maps them to status codes in `server::error`.

use figma_client::FigmaError;
use openai_client::OpenAIError;
use thiserror::Error;

use super::validate::ShapeError;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Required request field absent or malformed
    #[error("{0}")]
    ClientInput(String),

    /// Design-file source failed or answered with a non-success status
    #[error("document fetch failed: {message}")]
    UpstreamFetch {
        status: Option<u16>,
        message: String,
    },

    /// Design-file source answered without a `document` tree
    #[error("design file response has no document")]
    MissingDocument,

    /// Model call failed outright
    #[error("model call failed: {0}")]
    UpstreamModel(#[from] OpenAIError),

    /// Model answered, but not with JSON
    #[error("model response is not valid JSON")]
    Extraction { raw: String },

    /// Model answered with JSON of the wrong top-level shape
    #[error(transparent)]
    ShapeMismatch(#[from] ShapeError),
}

impl PipelineError {
    pub fn client_input(message: impl Into<String>) -> Self {
        PipelineError::ClientInput(message.into())
    }

    /// Short label for telemetry
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::ClientInput(_) => "client_input",
            PipelineError::UpstreamFetch { .. } => "upstream_fetch",
            PipelineError::MissingDocument => "missing_document",
            PipelineError::UpstreamModel(_) => "upstream_model",
            PipelineError::Extraction { .. } => "extraction",
            PipelineError::ShapeMismatch(_) => "shape_mismatch",
        }
    }
}

impl From<FigmaError> for PipelineError {
    fn from(err: FigmaError) -> Self {
        let status = err.status();
        let message = match err {
            FigmaError::Api { message, .. } => message,
            other => other.to_string(),
        };
        PipelineError::UpstreamFetch { status, message }
    }
}
