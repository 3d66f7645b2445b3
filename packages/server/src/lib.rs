// Design Assist - API Core
//
// Backend for a design-tool plugin. Proxies requests to the Figma REST API and
// an OpenAI chat model, and turns free-text model answers back into JSON.
//
// Endpoints live in server/routes, their domain logic in domains/*, and the
// model step shared by all of them in pipeline/.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod pipeline;
pub mod server;

pub use config::*;
