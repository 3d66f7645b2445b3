//! Flow analysis: critique a user-journey diagram.

use serde_json::Value;

use crate::kernel::ServerDeps;
use crate::pipeline::{apply_failure_policy, run_model, PipelineError, PromptInput, PromptKind, Telemetry};

use super::models::{DiagramPayload, FlowAnalyzeRequest};

pub async fn analyze_flow(deps: &ServerDeps, request: FlowAnalyzeRequest) -> Result<Value, PipelineError> {
    let mut telemetry = Telemetry::start("flow-analyze");
    let result = run_analysis(deps, request, &mut telemetry).await;
    telemetry.finish(&result);
    result
}

async fn run_analysis(
    deps: &ServerDeps,
    request: FlowAnalyzeRequest,
    telemetry: &mut Telemetry,
) -> Result<Value, PipelineError> {
    let payload = DiagramPayload::from_value(request.diagram_payload)?;

    telemetry.count("steps", payload.steps.len());
    telemetry.count("connectors", payload.connectors.len());
    telemetry.count("free_text", payload.free_text.len());

    let outcome = run_model(
        deps.ai.as_ref(),
        PromptInput::FlowAnalysis { payload: &payload },
        telemetry,
    )
    .await;

    apply_failure_policy(PromptKind::FlowAnalysis, outcome)
}
