// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Prompt wording and response handling live in the pipeline and domain modules.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseDocumentSource)

use async_trait::async_trait;
use figma_client::{FigmaError, FigmaFile};
use openai_client::{OpenAIError, Usage};

// =============================================================================
// AI Trait (Infrastructure - chat completion)
// =============================================================================

/// Sampling settings for one model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Raw model output. `text` is untrusted and may not be JSON at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub usage: Option<Usage>,
}

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Run one chat completion with a system instruction and a user message
    async fn complete(
        &self,
        instruction: &str,
        content: &str,
        options: &CompletionOptions,
    ) -> Result<Completion, OpenAIError>;
}

// =============================================================================
// Document Source Trait (Infrastructure - design files)
// =============================================================================

#[async_trait]
pub trait BaseDocumentSource: Send + Sync {
    /// Fetch a design file by key. The returned file may lack a document.
    async fn fetch_document(&self, file_key: &str) -> Result<FigmaFile, FigmaError>;
}
