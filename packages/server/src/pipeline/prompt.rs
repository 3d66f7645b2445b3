//! Prompt assembly for each endpoint.

use crate::domains::flow::models::DiagramPayload;
use crate::domains::flow::prompts::{flow_analysis_content, FLOW_ANALYSIS_INSTRUCTION};
use crate::domains::search::models::FrameRecord;
use crate::domains::search::prompts::{frame_search_content, FRAME_SEARCH_INSTRUCTION};
use crate::kernel::CompletionOptions;

use super::validate::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    FrameSearch,
    FlowAnalysis,
}

/// What to do when the model answer is unusable (not JSON, or the wrong shape).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Fail the request with an upstream error
    Strict,
    /// Answer 200 with a placeholder result so the caller UI keeps working
    Sentinel,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::FrameSearch => "frame_search",
            PromptKind::FlowAnalysis => "flow_analysis",
        }
    }

    pub fn expected_shape(self) -> Shape {
        match self {
            PromptKind::FrameSearch => Shape::Array,
            PromptKind::FlowAnalysis => Shape::Object,
        }
    }

    pub fn failure_policy(self) -> FailurePolicy {
        match self {
            PromptKind::FrameSearch => FailurePolicy::Sentinel,
            PromptKind::FlowAnalysis => FailurePolicy::Strict,
        }
    }

    pub fn completion_options(self) -> CompletionOptions {
        match self {
            PromptKind::FrameSearch => CompletionOptions {
                temperature: 0.3,
                max_output_tokens: 1500,
            },
            PromptKind::FlowAnalysis => CompletionOptions {
                temperature: 0.2,
                max_output_tokens: 1000,
            },
        }
    }
}

/// Data each prompt kind is built from.
#[derive(Debug, Clone, Copy)]
pub enum PromptInput<'a> {
    FrameSearch {
        query: &'a str,
        frames: &'a [FrameRecord],
    },
    FlowAnalysis {
        payload: &'a DiagramPayload,
    },
}

impl PromptInput<'_> {
    pub fn kind(&self) -> PromptKind {
        match self {
            PromptInput::FrameSearch { .. } => PromptKind::FrameSearch,
            PromptInput::FlowAnalysis { .. } => PromptKind::FlowAnalysis,
        }
    }
}

/// System instruction plus user message for one model call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub instruction: String,
    pub content: String,
}

pub fn build(input: PromptInput<'_>) -> Prompt {
    match input {
        PromptInput::FrameSearch { query, frames } => Prompt {
            instruction: FRAME_SEARCH_INSTRUCTION.to_string(),
            content: frame_search_content(query, frames),
        },
        PromptInput::FlowAnalysis { payload } => Prompt {
            instruction: FLOW_ANALYSIS_INSTRUCTION.to_string(),
            content: flow_analysis_content(payload),
        },
    }
}
