// TestDependencies - mock implementations for testing
//
// Provides mock collaborators that can be injected into ServerDeps for tests.

use async_trait::async_trait;
use figma_client::{FigmaError, FigmaFile, Node};
use openai_client::{OpenAIError, Usage};
use std::sync::{Arc, Mutex};

use super::{BaseAI, BaseDocumentSource, Completion, CompletionOptions, ServerDeps};

// =============================================================================
// Mock AI
// =============================================================================

/// Arguments captured from a completion call
#[derive(Debug, Clone)]
pub struct CompletionCall {
    pub instruction: String,
    pub content: String,
    pub options: CompletionOptions,
}

enum MockReply {
    Text(String),
    Error { status: u16, message: String },
}

#[derive(Clone, Default)]
pub struct MockAI {
    responses: Arc<Mutex<Vec<MockReply>>>,
    calls: Arc<Mutex<Vec<CompletionCall>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text response to the queue
    pub fn with_response(self, text: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockReply::Text(text.to_string()));
        self
    }

    /// Queue an API failure with the given HTTP status
    pub fn with_error(self, status: u16, message: &str) -> Self {
        self.responses.lock().unwrap().push(MockReply::Error {
            status,
            message: message.to_string(),
        });
        self
    }

    pub fn calls(&self) -> Vec<CompletionCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(
        &self,
        instruction: &str,
        content: &str,
        options: &CompletionOptions,
    ) -> Result<Completion, OpenAIError> {
        self.calls.lock().unwrap().push(CompletionCall {
            instruction: instruction.to_string(),
            content: content.to_string(),
            options: *options,
        });

        let mut responses = self.responses.lock().unwrap();
        let reply = if responses.is_empty() {
            MockReply::Text("[]".to_string())
        } else {
            responses.remove(0)
        };

        match reply {
            MockReply::Text(text) => {
                let completion_tokens = text.split_whitespace().count() as u32;
                Ok(Completion {
                    text,
                    usage: Some(Usage {
                        prompt_tokens: 100,
                        completion_tokens,
                        total_tokens: 100 + completion_tokens,
                    }),
                })
            }
            MockReply::Error { status, message } => Err(OpenAIError::Api { status, message }),
        }
    }
}

// =============================================================================
// Mock Document Source
// =============================================================================

#[derive(Clone, Default)]
pub struct MockDocumentSource {
    file: Arc<Mutex<Option<FigmaFile>>>,
    error: Arc<Mutex<Option<(u16, String)>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a file whose document is `root`
    pub fn with_document(self, root: Node) -> Self {
        *self.file.lock().unwrap() = Some(FigmaFile {
            name: Some("Mock File".to_string()),
            last_modified: None,
            document: Some(root),
        });
        self
    }

    /// Serve a file that has no `document` field
    pub fn without_document(self) -> Self {
        *self.file.lock().unwrap() = Some(FigmaFile::default());
        self
    }

    /// Fail every fetch with the given HTTP status
    pub fn with_error(self, status: u16, message: &str) -> Self {
        *self.error.lock().unwrap() = Some((status, message.to_string()));
        self
    }

    pub fn fetched_keys(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseDocumentSource for MockDocumentSource {
    async fn fetch_document(&self, file_key: &str) -> Result<FigmaFile, FigmaError> {
        self.calls.lock().unwrap().push(file_key.to_string());

        if let Some((status, message)) = self.error.lock().unwrap().clone() {
            return Err(FigmaError::Api { status, message });
        }

        Ok(self
            .file
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| FigmaFile {
                name: Some("Empty".to_string()),
                last_modified: None,
                document: Some(Node::new("DOCUMENT")),
            }))
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundle of mocks plus the ServerDeps wired to them
pub struct TestDependencies {
    pub ai: MockAI,
    pub documents: MockDocumentSource,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            ai: MockAI::new(),
            documents: MockDocumentSource::new(),
        }
    }

    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = ai;
        self
    }

    pub fn mock_documents(mut self, documents: MockDocumentSource) -> Self {
        self.documents = documents;
        self
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(Arc::new(self.ai.clone()), Arc::new(self.documents.clone()))
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
