use crate::pricing::models::{PriceSource, PricingKey, PricingResult};
use crate::pricing::tables::{self, tables_for};
use tracing::debug;

/// Turns a pricing key into rates. Must never fail: unknown input gets a
/// best-effort estimate.
pub trait PriceResolver: Send + Sync {
    fn resolve(&self, key: &PricingKey) -> PricingResult;
}

/// Resolver backed by the static on-demand tables
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticPriceResolver;

impl PriceResolver for StaticPriceResolver {
    fn resolve(&self, key: &PricingKey) -> PricingResult {
        let tables = tables_for(key.provider);

        let (base_compute, source) = match tables::lookup(tables.compute_rates, &key.instance_type) {
            Some(rate) => (rate, PriceSource::Api),
            None => (tables.fallback.compute_hourly, PriceSource::Fallback),
        };
        let compute_hourly_rate =
            base_compute * tables::multiplier(tables.compute_multipliers, &key.region);

        let base_storage = tables::lookup(tables.storage_rates, &key.storage_type)
            .unwrap_or(tables.fallback.storage_monthly_gb);
        let storage_monthly_rate_per_gb =
            base_storage * tables::multiplier(tables.storage_multipliers, &key.region);

        debug!(
            key = %key,
            compute_hourly_rate,
            storage_monthly_rate_per_gb,
            source = source.as_str(),
            "Resolved pricing"
        );

        PricingResult {
            compute_hourly_rate,
            storage_monthly_rate_per_gb,
            currency: "USD",
            resolved_at: chrono::Utc::now(),
            source,
        }
    }
}
