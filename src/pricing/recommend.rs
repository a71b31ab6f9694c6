use crate::pricing::calculator::CostCalculator;
use crate::pricing::models::{round_to, ComputeRequest};
use crate::provider::CloudProvider;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Storage attached to every recommended instance
pub const RECOMMENDATION_STORAGE_GB: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadType {
    #[default]
    General,
    Compute,
    Memory,
    Budget,
}

impl WorkloadType {
    /// Parse a workload name, falling back to `General` for anything unknown
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "compute" => WorkloadType::Compute,
            "memory" => WorkloadType::Memory,
            "budget" => WorkloadType::Budget,
            _ => WorkloadType::General,
        }
    }

    /// Candidate instance types for this workload on `provider`
    pub fn candidates(&self, provider: CloudProvider) -> &'static [&'static str] {
        use CloudProvider::*;
        use WorkloadType::*;
        match (self, provider) {
            (General, Aws) => &["t3.medium", "m5.large"],
            (General, Gcp) => &["e2-standard-2", "n1-standard-2"],
            (General, Azure) => &["Standard_B2ms", "Standard_D2s_v5"],
            (Compute, Aws) => &["c5.large", "c5.xlarge"],
            (Compute, Gcp) => &["c2-standard-4", "c2-standard-8"],
            (Compute, Azure) => &["Standard_F4s_v2", "Standard_F8s_v2"],
            (Memory, Aws) => &["r5.large", "r5.xlarge"],
            (Memory, Gcp) => &["n1-standard-4", "n2-standard-4"],
            (Memory, Azure) => &["Standard_E4s_v5", "Standard_E8s_v5"],
            (Budget, Aws) => &["t3.nano", "t3.micro", "t3.small"],
            (Budget, Gcp) => &["e2-micro", "e2-small"],
            (Budget, Azure) => &["Standard_B1s", "Standard_B1ms"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub provider: CloudProvider,
    pub instance_type: String,
    pub total_cost: f64,
    pub hourly_cost: f64,
    pub compute_cost: f64,
    pub region: String,
    pub fits_budget: bool,
}

/// Price every candidate for the workload on every provider, keep the ones
/// inside `budget_limit` and sort cheapest first. Entries that fail to price
/// are logged and skipped.
pub fn recommend(
    calculator: &CostCalculator,
    workload: WorkloadType,
    budget_limit: Option<f64>,
    hours: f64,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for provider in CloudProvider::ALL {
        for &instance_type in workload.candidates(provider) {
            let request = ComputeRequest::new(provider.as_str(), instance_type, hours)
                .with_storage_gb(RECOMMENDATION_STORAGE_GB);

            let result = match calculator.calculate(&request) {
                Ok(result) => result,
                Err(e) => {
                    warn!(
                        provider = %provider,
                        instance_type,
                        error = %e,
                        "Failed to price recommendation candidate"
                    );
                    continue;
                }
            };

            let fits_budget = budget_limit.map_or(true, |limit| result.total_cost <= limit);
            if !fits_budget {
                continue;
            }

            recommendations.push(Recommendation {
                provider,
                instance_type: instance_type.to_string(),
                total_cost: result.total_cost,
                hourly_cost: round_to(result.total_cost / hours, 4),
                compute_cost: result.compute_cost,
                region: result.region,
                fits_budget,
            });
        }
    }

    recommendations.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
    recommendations
}
