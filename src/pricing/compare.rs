use crate::error::AppError;
use crate::pricing::calculator::CostCalculator;
use crate::pricing::models::{round_to, ComputeRequest, PriceResponse};
use crate::provider::CloudProvider;
use serde::Serialize;
use std::collections::BTreeMap;

/// Cheapest vs most expensive summary across providers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub cheapest_provider: CloudProvider,
    pub most_expensive_provider: CloudProvider,
    pub max_savings: f64,
    pub percentage_savings: f64,
    pub cost_breakdown: BTreeMap<CloudProvider, f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub results: BTreeMap<CloudProvider, PriceResponse>,
    pub comparison: ComparisonSummary,
}

/// Summarize total costs. Ties go to the provider listed first.
pub fn summarize(costs: &[(CloudProvider, f64)]) -> Result<ComparisonSummary, AppError> {
    let (first, rest) = costs.split_first().ok_or_else(|| {
        AppError::Validation("At least one provider cost is required for comparison".to_string())
    })?;

    let mut cheapest = *first;
    let mut most_expensive = *first;
    for &(provider, cost) in rest {
        if cost < cheapest.1 {
            cheapest = (provider, cost);
        }
        if cost > most_expensive.1 {
            most_expensive = (provider, cost);
        }
    }

    let max_savings = most_expensive.1 - cheapest.1;
    let percentage_savings = if most_expensive.1 > 0.0 {
        max_savings / most_expensive.1 * 100.0
    } else {
        0.0
    };

    Ok(ComparisonSummary {
        cheapest_provider: cheapest.0,
        most_expensive_provider: most_expensive.0,
        max_savings: round_to(max_savings, 4),
        percentage_savings: round_to(percentage_savings, 2),
        cost_breakdown: costs
            .iter()
            .map(|&(provider, cost)| (provider, round_to(cost, 4)))
            .collect(),
    })
}

/// Price every request and compare the totals
pub fn compare(
    calculator: &CostCalculator,
    requests: &[ComputeRequest],
) -> Result<Comparison, AppError> {
    if requests.is_empty() {
        return Err(AppError::Validation(
            "At least one instance type must be provided (instance_aws, instance_gcp, or instance_azure)"
                .to_string(),
        ));
    }

    let mut results = BTreeMap::new();
    let mut costs = Vec::with_capacity(requests.len());
    for request in requests {
        let response = calculator.calculate(request)?;
        costs.push((response.provider, response.total_cost));
        results.insert(response.provider, response);
    }

    let comparison = summarize(&costs)?;
    tracing::info!(
        cheapest = %comparison.cheapest_provider,
        max_savings = comparison.max_savings,
        "Compared {} providers",
        costs.len()
    );

    Ok(Comparison { results, comparison })
}
