use crate::provider::CloudProvider;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite cache key. Provider is normalized, the rest is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PricingKey {
    pub provider: CloudProvider,
    pub region: String,
    pub instance_type: String,
    pub storage_type: String,
}

impl PricingKey {
    pub fn new(
        provider: CloudProvider,
        region: impl Into<String>,
        instance_type: impl Into<String>,
        storage_type: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            region: region.into(),
            instance_type: instance_type.into(),
            storage_type: storage_type.into(),
        }
    }
}

impl fmt::Display for PricingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}",
            self.provider, self.region, self.instance_type, self.storage_type
        )
    }
}

/// Where a resolved rate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    /// Instance type found in the provider rate table
    Api,
    /// Instance type unknown, provider fallback rate used
    Fallback,
}

impl PriceSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSource::Api => "api",
            PriceSource::Fallback => "fallback",
        }
    }
}

/// Resolved rates for one pricing key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingResult {
    pub compute_hourly_rate: f64,
    pub storage_monthly_rate_per_gb: f64,
    pub currency: &'static str,
    pub resolved_at: DateTime<Utc>,
    pub source: PriceSource,
}

/// Input to the cost calculator
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComputeRequest {
    pub provider: String,
    pub instance_type: String,
    pub hours_running: f64,
    #[serde(default)]
    pub storage_gb: Option<f64>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub storage_type: Option<String>,
}

impl ComputeRequest {
    pub fn new(provider: impl Into<String>, instance_type: impl Into<String>, hours_running: f64) -> Self {
        Self {
            provider: provider.into(),
            instance_type: instance_type.into(),
            hours_running,
            storage_gb: None,
            region: None,
            storage_type: None,
        }
    }

    pub fn with_storage_gb(mut self, storage_gb: f64) -> Self {
        self.storage_gb = Some(storage_gb);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_storage_type(mut self, storage_type: impl Into<String>) -> Self {
        self.storage_type = Some(storage_type.into());
        self
    }
}

/// Cost estimate for one request. Amounts are rounded to 4 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResponse {
    pub provider: CloudProvider,
    pub instance_type: String,
    pub hours_running: f64,
    pub storage_gb: f64,
    pub region: String,
    pub storage_type: String,
    pub compute_cost: f64,
    pub storage_cost: f64,
    pub total_cost: f64,
    pub currency: String,
    pub last_updated: DateTime<Utc>,
    pub price_source: PriceSource,
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
