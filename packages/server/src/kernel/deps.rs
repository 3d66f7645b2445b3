//! Server dependencies for request handlers (using traits for testability)
//!
//! All external services sit behind trait objects so tests can swap in the
//! mocks from `test_dependencies`.

use async_trait::async_trait;
use figma_client::{FigmaClient, FigmaError, FigmaFile};
use openai_client::{ChatRequest, Message, OpenAIClient, OpenAIError};
use std::sync::Arc;

use crate::config::Config;
use crate::kernel::{BaseAI, BaseDocumentSource, Completion, CompletionOptions};

// =============================================================================
// OpenAIClient Adapter (implements BaseAI trait)
// =============================================================================

/// Wrapper around OpenAIClient that pins the model used for every call
pub struct OpenAIAdapter {
    client: OpenAIClient,
    model: String,
}

impl OpenAIAdapter {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl BaseAI for OpenAIAdapter {
    async fn complete(
        &self,
        instruction: &str,
        content: &str,
        options: &CompletionOptions,
    ) -> Result<Completion, OpenAIError> {
        let request = ChatRequest::new(self.model.as_str())
            .message(Message::system(instruction))
            .message(Message::user(content))
            .temperature(options.temperature)
            .output_limit(options.max_output_tokens);

        let response = self.client.chat_completion(request).await?;

        Ok(Completion {
            text: response.content,
            usage: response.usage,
        })
    }
}

// =============================================================================
// FigmaClient Adapter (implements BaseDocumentSource trait)
// =============================================================================

pub struct FigmaAdapter(pub FigmaClient);

impl FigmaAdapter {
    pub fn new(client: FigmaClient) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseDocumentSource for FigmaAdapter {
    async fn fetch_document(&self, file_key: &str) -> Result<FigmaFile, FigmaError> {
        self.0.fetch_file(file_key).await
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Collaborators shared by every request. Immutable once built.
#[derive(Clone)]
pub struct ServerDeps {
    pub ai: Arc<dyn BaseAI>,
    pub documents: Arc<dyn BaseDocumentSource>,
}

impl ServerDeps {
    pub fn new(ai: Arc<dyn BaseAI>, documents: Arc<dyn BaseDocumentSource>) -> Self {
        Self { ai, documents }
    }

    /// Build the real HTTP-backed collaborators from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let openai = OpenAIClient::new(config.openai_api_key.clone())
            .with_base_url(config.openai_base_url.clone())
            .with_timeout(config.upstream_timeout)?;

        let figma = FigmaClient::new(config.figma_token.clone())
            .with_base_url(config.figma_api_base.clone())
            .with_timeout(config.upstream_timeout)?;

        Ok(Self::new(
            Arc::new(OpenAIAdapter::new(openai, config.openai_model.clone())),
            Arc::new(FigmaAdapter::new(figma)),
        ))
    }
}
