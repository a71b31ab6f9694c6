use crate::handlers::AppState;
use crate::provider::CloudProvider;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde_json::json;

/// Health check endpoint
/// Returns 200 OK while the service is running
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "timestamp": Utc::now(),
            "cache_entries": state.cache().len(),
            "version": env!("CARGO_PKG_VERSION"),
            "supported_providers": CloudProvider::ALL,
        })),
    )
}
