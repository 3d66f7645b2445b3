//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

/// Default chat model; cheap and good enough for both endpoints.
pub const GPT_4O_MINI: &str = "gpt-4o-mini";

pub use deps::{FigmaAdapter, OpenAIAdapter, ServerDeps};
pub use test_dependencies::{MockAI, MockDocumentSource, TestDependencies};
pub use traits::*;
