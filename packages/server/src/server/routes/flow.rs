//! POST /flow-analyze
//!
//! Body `{ diagramPayload: { steps, connectors, freeText } }`. Answers with the
//! structured UX analysis object.

use axum::extract::Extension;
use axum::Json;
use serde_json::Value;
use tracing::Instrument;

use crate::domains::flow::{analyze_flow, FlowAnalyzeRequest};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;
use crate::server::extract::JsonBody;

pub async fn flow_analyze_handler(
    Extension(state): Extension<AxumAppState>,
    JsonBody(request): JsonBody<FlowAnalyzeRequest>,
) -> Result<Json<Value>, ApiError> {
    let span = tracing::info_span!("flow_analyze", request_id = %uuid::Uuid::new_v4());
    let analysis = analyze_flow(&state.deps, request).instrument(span).await?;

    Ok(Json(analysis))
}
