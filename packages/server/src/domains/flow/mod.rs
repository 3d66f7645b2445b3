pub mod activities;
pub mod models;
pub mod prompts;

pub use activities::analyze_flow;
pub use models::{Connector, DiagramPayload, FlowAnalyzeRequest, Step};
