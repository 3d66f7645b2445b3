//! Frame search: fetch the design file, flatten it, ask the model.

use serde_json::Value;

use crate::kernel::ServerDeps;
use crate::pipeline::{apply_failure_policy, run_model, PipelineError, PromptInput, PromptKind, Telemetry};

use super::flatten::flatten;
use super::models::SearchRequest;

/// Answer a search query against a design file.
///
/// The document fetch completes before the model call is issued, since the
/// prompt is built from it.
pub async fn search_frames(deps: &ServerDeps, request: SearchRequest) -> Result<Value, PipelineError> {
    let mut telemetry = Telemetry::start("search");
    let result = run_search(deps, request, &mut telemetry).await;
    telemetry.finish(&result);
    result
}

async fn run_search(
    deps: &ServerDeps,
    request: SearchRequest,
    telemetry: &mut Telemetry,
) -> Result<Value, PipelineError> {
    let (query, file_key) = request.require_fields()?;

    let file = deps.documents.fetch_document(&file_key).await?;
    let document = file.document.ok_or(PipelineError::MissingDocument)?;

    let frames = flatten(&document);
    telemetry.count("frames", frames.len());
    tracing::debug!(file_key = %file_key, frames = frames.len(), "Flattened design file");

    let outcome = run_model(
        deps.ai.as_ref(),
        PromptInput::FrameSearch {
            query: &query,
            frames: &frames,
        },
        telemetry,
    )
    .await;

    apply_failure_policy(PromptKind::FrameSearch, outcome)
}
