//! Model step shared by every endpoint: build prompt, call the model once,
//! extract JSON, check its shape.
//!
//! There are no retries. The model call is the only await point here.

use std::time::Instant;

use openai_client::{truncate_to_char_boundary, Usage};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::domains::search::models::SearchMatch;
use crate::kernel::BaseAI;

use super::error::PipelineError;
use super::extract::{extract, ExtractionResult};
use super::prompt::{build, FailurePolicy, PromptInput, PromptKind};
use super::validate::{validate, ValidatedPayload};

/// Longest slice of an unusable model answer written to the log.
const MAX_LOGGED_ANSWER_BYTES: usize = 4_000;

/// Per-request counters, logged once when the request finishes.
#[derive(Debug)]
pub struct Telemetry {
    endpoint: &'static str,
    started: Instant,
    counts: Vec<(&'static str, usize)>,
    usage: Option<Usage>,
}

impl Telemetry {
    pub fn start(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            started: Instant::now(),
            counts: Vec::new(),
            usage: None,
        }
    }

    pub fn count(&mut self, what: &'static str, n: usize) {
        self.counts.push((what, n));
    }

    pub fn record_usage(&mut self, usage: Option<Usage>) {
        self.usage = usage;
    }

    pub fn usage(&self) -> Option<Usage> {
        self.usage
    }

    pub fn finish<T>(&self, result: &Result<T, PipelineError>) {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        let total_tokens = self.usage.map(|u| u.total_tokens);
        match result {
            Ok(_) => info!(
                endpoint = self.endpoint,
                counts = ?self.counts,
                elapsed_ms,
                total_tokens = ?total_tokens,
                "Request completed"
            ),
            Err(e) => warn!(
                endpoint = self.endpoint,
                counts = ?self.counts,
                elapsed_ms,
                total_tokens = ?total_tokens,
                error_kind = e.kind(),
                error = %e,
                "Request failed"
            ),
        }
    }
}

/// Build the prompt, call the model and return the validated answer.
pub async fn run_model(
    ai: &dyn BaseAI,
    input: PromptInput<'_>,
    telemetry: &mut Telemetry,
) -> Result<ValidatedPayload, PipelineError> {
    let kind = input.kind();
    let prompt = build(input);
    let options = kind.completion_options();

    let completion = ai
        .complete(&prompt.instruction, &prompt.content, &options)
        .await
        .map_err(|e| {
            error!(kind = kind.label(), status = ?e.status(), error = %e, "Model call failed");
            PipelineError::UpstreamModel(e)
        })?;
    telemetry.record_usage(completion.usage);

    let value = match extract(&completion.text) {
        ExtractionResult::Parsed(value) => value,
        ExtractionResult::Failed(raw) => {
            error!(
                kind = kind.label(),
                raw = truncate_to_char_boundary(&raw, MAX_LOGGED_ANSWER_BYTES),
                "Model answer is not JSON"
            );
            return Err(PipelineError::Extraction { raw });
        }
    };

    validate(kind, value).map_err(|e| {
        let shown = e.value.to_string();
        error!(
            kind = kind.label(),
            error = %e,
            value = truncate_to_char_boundary(&shown, MAX_LOGGED_ANSWER_BYTES),
            "Model answer has the wrong shape"
        );
        PipelineError::ShapeMismatch(e)
    })
}

/// Apply the kind's failure policy to the outcome of `run_model`.
///
/// Only unusable answers are softened; client, fetch and transport errors
/// always propagate.
pub fn apply_failure_policy(
    kind: PromptKind,
    result: Result<ValidatedPayload, PipelineError>,
) -> Result<Value, PipelineError> {
    match (kind.failure_policy(), result) {
        (_, Ok(payload)) => Ok(payload.into_value()),
        (FailurePolicy::Sentinel, Err(PipelineError::Extraction { .. }))
        | (FailurePolicy::Sentinel, Err(PipelineError::ShapeMismatch(_))) => {
            Ok(search_sentinel())
        }
        (_, Err(e)) => Err(e),
    }
}

/// Only frame search runs under the sentinel policy, so the placeholder is
/// always a one-element match list.
fn search_sentinel() -> Value {
    serde_json::json!([SearchMatch::error_sentinel(
        "The assistant's answer could not be read. Please try rephrasing your search."
    )])
}
