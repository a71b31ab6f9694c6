use crate::handlers::AppState;
use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct CacheEntryDetails {
    pub expires_at: DateTime<Utc>,
    pub expires_in_minutes: u64,
    pub is_valid: bool,
}

#[derive(Debug, Serialize)]
pub struct CacheStatusResponse {
    pub cache_entries: usize,
    pub cache_details: BTreeMap<String, CacheEntryDetails>,
    pub cache_duration_hours: f64,
}

#[derive(Debug, Serialize)]
pub struct CacheClearResponse {
    pub message: String,
    pub cleared_entries: usize,
    pub timestamp: DateTime<Utc>,
}

/// GET /cache/status
pub async fn status(State(state): State<AppState>) -> Json<CacheStatusResponse> {
    let cache = state.cache();
    let cache_details: BTreeMap<_, _> = cache
        .status()
        .into_iter()
        .map(|entry| {
            (
                entry.key,
                CacheEntryDetails {
                    expires_at: entry.expires_at,
                    expires_in_minutes: entry.expires_in_minutes,
                    is_valid: entry.is_valid,
                },
            )
        })
        .collect();

    Json(CacheStatusResponse {
        cache_entries: cache_details.len(),
        cache_details,
        cache_duration_hours: cache.ttl().as_secs_f64() / 3600.0,
    })
}

/// DELETE /cache/clear
pub async fn clear(State(state): State<AppState>) -> Json<CacheClearResponse> {
    let cleared_entries = state.cache().clear();

    Json(CacheClearResponse {
        message: "Cache cleared successfully".to_string(),
        cleared_entries,
        timestamp: Utc::now(),
    })
}
