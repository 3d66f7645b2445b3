pub mod app;
pub mod error;
pub mod extract;
pub mod routes;

pub use app::{build_app, AxumAppState};
pub use error::ApiError;
pub use extract::JsonBody;
