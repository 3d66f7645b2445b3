use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Sanity check for people poking the server from a browser
pub async fn root_handler() -> &'static str {
    "Hello from Design Assist!"
}

/// Health check endpoint
///
/// The service holds no connections of its own, so being able to answer is
/// the whole check.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
