// HTTP routes
pub mod flow;
pub mod health;
pub mod search;

pub use flow::*;
pub use health::*;
pub use search::*;
