//! API error type. Every failure leaves the server as `{ "error": string }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::pipeline::PipelineError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

impl ApiError {
    pub fn invalid_body(detail: impl std::fmt::Display) -> Self {
        Self::bad_request(format!("Invalid JSON body: {}", detail))
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::ClientInput(message) => ApiError::bad_request(message),
            PipelineError::UpstreamFetch { status, message } => {
                // Keep the design-file API's own error status when it has one
                let status = status
                    .and_then(|s| StatusCode::from_u16(s).ok())
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                ApiError::new(status, format!("Failed to fetch design file: {}", message))
            }
            PipelineError::MissingDocument => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Design file response did not include a document",
            ),
            PipelineError::UpstreamModel(_) => {
                ApiError::new(StatusCode::BAD_GATEWAY, "LLM analysis failed, please retry.")
            }
            PipelineError::Extraction { .. } => {
                ApiError::new(StatusCode::BAD_GATEWAY, "Invalid JSON from LLM, please retry.")
            }
            PipelineError::ShapeMismatch(_) => ApiError::new(
                StatusCode::BAD_GATEWAY,
                "Unexpected response shape from LLM, please retry.",
            ),
        }
    }
}
