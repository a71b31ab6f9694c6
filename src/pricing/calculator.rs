use crate::error::AppError;
use crate::metrics;
use crate::pricing::cache::PriceCache;
use crate::pricing::models::{round_to, ComputeRequest, PriceResponse, PricingKey};
use crate::provider::CloudProvider;
use std::sync::Arc;

/// Hours in the 30-day month used to turn monthly storage rates hourly
pub const HOURS_PER_MONTH: f64 = 24.0 * 30.0;

/// Calculator for turning a compute request into costs
#[derive(Clone)]
pub struct CostCalculator {
    cache: Arc<PriceCache>,
}

impl CostCalculator {
    pub fn new(cache: Arc<PriceCache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Arc<PriceCache> {
        &self.cache
    }

    /// Calculate cost for a request
    pub fn calculate(&self, request: &ComputeRequest) -> Result<PriceResponse, AppError> {
        let provider: CloudProvider = request.provider.parse()?;
        validate_hours(request.hours_running)?;

        let storage_gb = request.storage_gb.unwrap_or(0.0);
        if !storage_gb.is_finite() || storage_gb < 0.0 {
            return Err(AppError::Validation(format!(
                "storage_gb must be greater than or equal to 0 (got {})",
                storage_gb
            )));
        }

        let region = non_empty(request.region.as_deref()).unwrap_or(provider.default_region());
        let storage_type =
            non_empty(request.storage_type.as_deref()).unwrap_or(provider.default_storage_type());

        let key = PricingKey::new(provider, region, request.instance_type.as_str(), storage_type);
        let pricing = self.cache.get_or_resolve(&key);

        let compute_cost = pricing.compute_hourly_rate * request.hours_running;
        let storage_hourly_rate = pricing.storage_monthly_rate_per_gb / HOURS_PER_MONTH;
        let storage_cost = storage_hourly_rate * storage_gb * request.hours_running;
        let total_cost = compute_cost + storage_cost;

        metrics::record_calculation(provider.as_str(), pricing.source.as_str());
        tracing::debug!(
            provider = %provider,
            instance_type = %request.instance_type,
            region = %region,
            total_cost,
            "Calculated price"
        );

        Ok(PriceResponse {
            provider,
            instance_type: request.instance_type.clone(),
            hours_running: request.hours_running,
            storage_gb,
            region: region.to_string(),
            storage_type: storage_type.to_string(),
            compute_cost: round_to(compute_cost, 4),
            storage_cost: round_to(storage_cost, 4),
            total_cost: round_to(total_cost, 4),
            currency: pricing.currency.to_string(),
            last_updated: pricing.resolved_at,
            price_source: pricing.source,
        })
    }
}

pub(crate) fn validate_hours(hours: f64) -> Result<(), AppError> {
    if !hours.is_finite() || hours <= 0.0 {
        return Err(AppError::Validation(format!(
            "hours_running must be greater than 0 (got {})",
            hours
        )));
    }
    Ok(())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::cache::DEFAULT_TTL;
    use crate::pricing::models::PriceSource;
    use crate::pricing::resolver::StaticPriceResolver;

    fn calculator() -> CostCalculator {
        let cache = Arc::new(PriceCache::new(Arc::new(StaticPriceResolver), DEFAULT_TTL));
        CostCalculator::new(cache)
    }

    #[test]
    fn test_aws_reference_calculation() {
        let request = ComputeRequest::new("aws", "t3.medium", 100.0)
            .with_storage_gb(50.0)
            .with_region("us-east-1")
            .with_storage_type("gp3");

        let response = calculator().calculate(&request).unwrap();

        assert_eq!(response.compute_cost, 4.16);
        assert_eq!(response.storage_cost, 0.5556);
        assert_eq!(response.total_cost, 4.7156);
        assert_eq!(response.currency, "USD");
        assert_eq!(response.price_source, PriceSource::Api);
    }

    #[test]
    fn test_defaults_region_and_storage_type() {
        let calc = calculator();

        let response = calc.calculate(&ComputeRequest::new("GCP", "e2-micro", 10.0)).unwrap();
        assert_eq!(response.provider, CloudProvider::Gcp);
        assert_eq!(response.region, "us-central1");
        assert_eq!(response.storage_type, "pd-standard");
        assert_eq!(response.storage_gb, 0.0);
        assert_eq!(response.storage_cost, 0.0);

        let response = calc
            .calculate(&ComputeRequest::new("azure", "Standard_B2s", 10.0).with_region(""))
            .unwrap();
        assert_eq!(response.region, "eastus");
        assert_eq!(response.storage_type, "Standard_LRS");
    }

    #[test]
    fn test_zero_hours_fails_validation() {
        let err = calculator()
            .calculate(&ComputeRequest::new("aws", "t3.medium", 0.0))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = calculator()
            .calculate(&ComputeRequest::new("aws", "t3.medium", -5.0))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_negative_storage_fails_validation() {
        let err = calculator()
            .calculate(&ComputeRequest::new("aws", "t3.medium", 1.0).with_storage_gb(-1.0))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unknown_provider_fails() {
        let err = calculator()
            .calculate(&ComputeRequest::new("oracle", "vm.standard", 1.0))
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownProvider(_)));
    }

    #[test]
    fn test_calculation_populates_cache() {
        let calc = calculator();
        calc.calculate(&ComputeRequest::new("aws", "m5.large", 1.0)).unwrap();
        calc.calculate(&ComputeRequest::new("aws", "m5.large", 2.0)).unwrap();
        assert_eq!(calc.cache().len(), 1);
    }

    #[test]
    fn test_unknown_instance_reports_fallback_source() {
        let response = calculator()
            .calculate(&ComputeRequest::new("aws", "mystery.huge", 10.0))
            .unwrap();
        assert_eq!(response.compute_cost, 0.5);
        assert_eq!(response.price_source, PriceSource::Fallback);
    }
}
