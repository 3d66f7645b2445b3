//! Request pipeline: prompt building, model call, JSON extraction and shape
//! validation. Shared by every endpoint in `domains`.

pub mod error;
pub mod extract;
pub mod orchestrator;
pub mod prompt;
pub mod validate;

pub use error::PipelineError;
pub use extract::{extract, ExtractionResult};
pub use orchestrator::{apply_failure_policy, run_model, Telemetry};
pub use prompt::{build, FailurePolicy, Prompt, PromptInput, PromptKind};
pub use validate::{validate, Shape, ShapeError, ValidatedPayload};
