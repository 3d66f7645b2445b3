//! POST /search
//!
//! Body `{ query, fileKey }`. Answers with an array of `{ name, reason, confidence }`.

use axum::extract::Extension;
use axum::Json;
use serde_json::Value;
use tracing::Instrument;

use crate::domains::search::{search_frames, SearchRequest};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;
use crate::server::extract::JsonBody;

pub async fn search_handler(
    Extension(state): Extension<AxumAppState>,
    JsonBody(request): JsonBody<SearchRequest>,
) -> Result<Json<Value>, ApiError> {
    let span = tracing::info_span!("search", request_id = %uuid::Uuid::new_v4());
    let matches = search_frames(&state.deps, request).instrument(span).await?;

    Ok(Json(matches))
}
