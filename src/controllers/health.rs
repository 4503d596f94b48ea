use axum::{response::IntoResponse, Json};
use serde_json::json;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to the TTS gateway",
        "status": "running"
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy"
    }))
}
