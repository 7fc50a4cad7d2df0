use axum::{response::IntoResponse, Json};
use serde_json::json;
use tracing::instrument;

pub const HEALTH_STATUS: &str = "Chatbot backend is running";

#[instrument]
pub async fn health() -> impl IntoResponse {
    tracing::debug!("health check");
    Json(json!({ "status": HEALTH_STATUS }))
}
