use crate::error::AppError;
use crate::handlers::AppState;
use crate::pricing::calculator::validate_hours;
use crate::pricing::trends::{self, TrendPoint, TrendSummary, MAX_TREND_DAYS};
use crate::pricing::{
    compare, recommend, ComparisonSummary, ComputeRequest, PriceResponse, Recommendation,
    WorkloadType,
};
use crate::provider::CloudProvider;
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_hours() -> f64 {
    24.0
}

fn default_workload() -> String {
    "general".to_string()
}

fn default_performance_tier() -> String {
    "standard".to_string()
}

fn default_days() -> u32 {
    7
}

/// POST /calculate
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> Result<Json<PriceResponse>, AppError> {
    let Json(request) = payload?;
    let response = state.calculator.calculate(&request)?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub instance_aws: Option<String>,
    pub instance_gcp: Option<String>,
    pub instance_azure: Option<String>,
    #[serde(default = "default_hours")]
    pub hours: f64,
    #[serde(default)]
    pub storage_gb: f64,
    pub aws_region: Option<String>,
    pub gcp_region: Option<String>,
    pub azure_region: Option<String>,
}

impl CompareQuery {
    fn requests(&self) -> Vec<ComputeRequest> {
        let selections = [
            (CloudProvider::Aws, &self.instance_aws, &self.aws_region),
            (CloudProvider::Gcp, &self.instance_gcp, &self.gcp_region),
            (CloudProvider::Azure, &self.instance_azure, &self.azure_region),
        ];

        selections
            .into_iter()
            .filter_map(|(provider, instance, region)| {
                let instance = instance.as_deref().filter(|i| !i.trim().is_empty())?;
                let mut request = ComputeRequest::new(provider.as_str(), instance, self.hours)
                    .with_storage_gb(self.storage_gb);
                if let Some(region) = region {
                    request = request.with_region(region.as_str());
                }
                Some(request)
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub comparison_timestamp: DateTime<Utc>,
    pub results: BTreeMap<CloudProvider, PriceResponse>,
    pub comparison: ComparisonSummary,
}

/// GET /compare
pub async fn compare_prices(
    State(state): State<AppState>,
    query: Result<Query<CompareQuery>, QueryRejection>,
) -> Result<Json<CompareResponse>, AppError> {
    let Query(query) = query?;
    let comparison = compare(&state.calculator, &query.requests())?;

    Ok(Json(CompareResponse {
        comparison_timestamp: Utc::now(),
        results: comparison.results,
        comparison: comparison.comparison,
    }))
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    #[serde(default = "default_workload")]
    pub workload_type: String,
    pub budget_limit: Option<f64>,
    #[serde(default = "default_performance_tier")]
    pub performance_tier: String,
    #[serde(default = "default_hours")]
    pub hours: f64,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub workload_type: WorkloadType,
    pub performance_tier: String,
    pub budget_limit: Option<f64>,
    pub hours: f64,
    pub recommendations: Vec<Recommendation>,
}

/// GET /recommendations
pub async fn recommendations(
    State(state): State<AppState>,
    query: Result<Query<RecommendationQuery>, QueryRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let Query(query) = query?;
    validate_hours(query.hours)?;

    let workload = WorkloadType::parse_lenient(&query.workload_type);
    let recommendations = recommend(&state.calculator, workload, query.budget_limit, query.hours);

    Ok(Json(RecommendationResponse {
        workload_type: workload,
        performance_tier: query.performance_tier,
        budget_limit: query.budget_limit,
        hours: query.hours,
        recommendations,
    }))
}

#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    pub instance_type: String,
    pub region: Option<String>,
    #[serde(default = "default_days")]
    pub days: u32,
}

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub provider: CloudProvider,
    pub instance_type: String,
    pub region: String,
    pub period_days: u32,
    pub current_price: f64,
    pub trends: Vec<TrendPoint>,
    pub summary: TrendSummary,
}

/// GET /pricing-trends/{provider}
pub async fn pricing_trends(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    query: Result<Query<TrendQuery>, QueryRejection>,
) -> Result<Json<TrendResponse>, AppError> {
    let provider: CloudProvider = provider.parse()?;
    let Query(query) = query?;

    if query.days == 0 || query.days > MAX_TREND_DAYS {
        return Err(AppError::Validation(format!(
            "days must be between 1 and {} (got {})",
            MAX_TREND_DAYS, query.days
        )));
    }

    let mut request = ComputeRequest::new(provider.as_str(), query.instance_type.as_str(), 1.0);
    if let Some(region) = &query.region {
        request = request.with_region(region.as_str());
    }
    let current = state.calculator.calculate(&request)?;

    let points = trends::simulate(current.compute_cost, query.days, Utc::now().date_naive());
    let summary = trends::summarize(&points)
        .ok_or_else(|| AppError::InternalError("empty trend series".to_string()))?;

    Ok(Json(TrendResponse {
        provider,
        instance_type: query.instance_type,
        region: current.region,
        period_days: query.days,
        current_price: current.compute_cost,
        trends: points,
        summary,
    }))
}
