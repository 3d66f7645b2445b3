// Endpoint domains. Each owns its request models, prompt text and the
// activity that runs the request through the pipeline.

pub mod flow;
pub mod search;
