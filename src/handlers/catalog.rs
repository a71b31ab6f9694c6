use crate::catalog::{self, InstanceCatalog, Region};
use crate::error::AppError;
use crate::handlers::AppState;
use crate::provider::CloudProvider;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// GET /
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Cloud Price Calculator API",
        "version": env!("CARGO_PKG_VERSION"),
        "features": ["pricing", "aws", "gcp", "azure", "price comparison", "caching", "billing catalog"],
    }))
}

/// GET /providers
pub async fn providers(State(state): State<AppState>) -> Json<Value> {
    let mut body = Map::new();
    body.insert("providers".to_string(), json!(CloudProvider::ALL));
    for provider in CloudProvider::ALL {
        body.insert(
            format!("{}_regions", provider.as_str()),
            json!(catalog::region_codes(provider)),
        );
    }
    body.insert(
        "cache_duration_minutes".to_string(),
        json!(state.cache().ttl().as_secs() / 60),
    );

    Json(Value::Object(body))
}

/// GET /instances/{provider}
pub async fn instances(Path(provider): Path<String>) -> Result<Json<InstanceCatalog>, AppError> {
    let provider: CloudProvider = provider.parse()?;
    Ok(Json(catalog::instances(provider)))
}

#[derive(Debug, Serialize)]
pub struct RegionsResponse {
    pub regions: Vec<Region>,
}

/// GET /regions/{provider}
pub async fn regions(Path(provider): Path<String>) -> Result<Json<RegionsResponse>, AppError> {
    let provider: CloudProvider = provider.parse()?;
    Ok(Json(RegionsResponse {
        regions: catalog::regions(provider),
    }))
}
