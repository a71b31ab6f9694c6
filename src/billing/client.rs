use crate::billing::models::{CatalogService, ServiceInfo, ServiceList, SkuList, SkuPrice};
use crate::config::CatalogConfig;
use crate::error::AppError;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

const UNKNOWN_SERVICE: &str = "Unknown Service";

pub fn build_client(config: &CatalogConfig) -> Result<Client, AppError> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(AppError::HttpRequest)
}

fn api_key(config: &CatalogConfig) -> Result<&str, AppError> {
    if config.has_api_key() {
        Ok(config.api_key.trim())
    } else {
        Err(AppError::ConfigError("API key not configured".to_string()))
    }
}

/// Append `segments` to the configured base URL, percent-encoding each one
fn catalog_url(config: &CatalogConfig, segments: &[&str]) -> Result<Url, AppError> {
    let mut url = Url::parse(&config.base_url)
        .map_err(|e| AppError::ConfigError(format!("Invalid catalog base_url: {}", e)))?;

    url.path_segments_mut()
        .map_err(|_| AppError::ConfigError(format!("Invalid catalog base_url: {}", config.base_url)))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

async fn get_json<T: DeserializeOwned>(
    client: &Client,
    config: &CatalogConfig,
    segments: &[&str],
) -> Result<T, AppError> {
    let key = api_key(config)?;
    let url = catalog_url(config, segments)?;

    tracing::debug!(url = %url, "Catalog request");

    let response = client.get(url.clone()).query(&[("key", key)]).send().await?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        tracing::warn!(status = %status, path = url.path(), "Catalog API returned an error");
        return Err(AppError::UpstreamError { status, message });
    }

    Ok(response.json::<T>().await?)
}

/// All public Cloud Billing services
pub async fn list_services(client: &Client, config: &CatalogConfig) -> Result<Vec<ServiceInfo>, AppError> {
    let list: ServiceList = get_json(client, config, &["services"]).await?;
    Ok(list.services.iter().map(ServiceInfo::from).collect())
}

/// SKUs of one service, optionally restricted to SKUs offered in `region`
pub async fn service_pricing(
    client: &Client,
    config: &CatalogConfig,
    service_id: &str,
    region: Option<&str>,
) -> Result<Vec<SkuPrice>, AppError> {
    let service: CatalogService = get_json(client, config, &["services", service_id]).await?;
    let display_name = if service.display_name.is_empty() {
        UNKNOWN_SERVICE.to_string()
    } else {
        service.display_name
    };

    let list: SkuList = get_json(client, config, &["services", service_id, "skus"]).await?;

    let prices: Vec<SkuPrice> = list
        .skus
        .into_iter()
        .filter(|sku| region.map_or(true, |r| sku.service_regions.iter().any(|sr| sr == r)))
        .map(|sku| SkuPrice {
            sku_id: sku.sku_id,
            description: sku.description,
            service_display_name: display_name.clone(),
            pricing_info: sku.pricing_info.into_iter().next().unwrap_or_default(),
            service_regions: sku.service_regions,
            category: sku.category,
        })
        .collect();

    tracing::debug!(service_id = service_id, skus = prices.len(), "Fetched service pricing");

    Ok(prices)
}

/// SKU prices of every service whose display name or description contains
/// `query`, case-insensitively
pub async fn search(
    client: &Client,
    config: &CatalogConfig,
    query: &str,
    region: Option<&str>,
) -> Result<Vec<SkuPrice>, AppError> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Err(AppError::Validation("query must not be empty".to_string()));
    }

    let list: ServiceList = get_json(client, config, &["services"]).await?;
    let matching: Vec<String> = list
        .services
        .iter()
        .filter(|s| {
            s.display_name.to_lowercase().contains(&query)
                || s.service_description.to_lowercase().contains(&query)
        })
        .map(|s| s.service_id().to_string())
        .collect();

    tracing::info!(query = %query, services = matching.len(), "Catalog search");

    let mut results = Vec::new();
    for service_id in matching {
        results.extend(service_pricing(client, config, &service_id, region).await?);
    }

    Ok(results)
}
