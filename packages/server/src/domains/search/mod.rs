pub mod activities;
pub mod flatten;
pub mod models;
pub mod prompts;

pub use activities::search_frames;
pub use flatten::{flatten, flatten_with, FlattenOptions, PreOrder};
pub use models::{Confidence, FrameRecord, SearchMatch, SearchRequest};
