use crate::billing::{self, EstimateRequest, ServiceInfo, SkuEstimate, SkuPrice};
use crate::error::AppError;
use crate::handlers::AppState;
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegionQuery {
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    pub region: Option<String>,
}

/// GET /catalog/services
pub async fn services(State(state): State<AppState>) -> Result<Json<Vec<ServiceInfo>>, AppError> {
    let services = billing::list_services(&state.http_client, &state.config.catalog).await?;
    Ok(Json(services))
}

/// GET /catalog/pricing/{service_id}
pub async fn service_pricing(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    query: Result<Query<RegionQuery>, QueryRejection>,
) -> Result<Json<Vec<SkuPrice>>, AppError> {
    let Query(query) = query?;
    let prices = billing::service_pricing(
        &state.http_client,
        &state.config.catalog,
        &service_id,
        query.region.as_deref(),
    )
    .await?;
    Ok(Json(prices))
}

/// GET /catalog/search
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<SkuPrice>>, AppError> {
    let Query(query) = query?;
    let prices = billing::search(
        &state.http_client,
        &state.config.catalog,
        &query.query,
        query.region.as_deref(),
    )
    .await?;
    Ok(Json(prices))
}

/// POST /catalog/estimate
pub async fn estimate(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<SkuEstimate>, AppError> {
    let Json(request) = payload?;
    let skus = billing::service_pricing(
        &state.http_client,
        &state.config.catalog,
        &request.service_id,
        request.region.as_deref(),
    )
    .await?;

    let quote = billing::estimate(&skus, request.vcpus, request.hours)?;
    tracing::info!(
        service_id = %request.service_id,
        sku_id = %quote.applicable_sku.sku_id,
        total_cost = quote.total_cost,
        "Estimated catalog SKU cost"
    );
    Ok(Json(quote))
}
