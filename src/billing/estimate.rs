use crate::billing::models::SkuPrice;
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// vCPU boundary between the small and large licensing tiers
pub const SMALL_TIER_MAX_VCPUS: u32 = 4;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EstimateRequest {
    pub service_id: String,
    pub vcpus: u32,
    pub hours: f64,
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateInput {
    pub vcpus: u32,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicableSku {
    pub sku_id: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageDetails {
    pub usage_unit: String,
    pub usage_unit_description: String,
    pub base_unit: String,
    pub base_unit_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkuEstimate {
    pub input_parameters: EstimateInput,
    pub applicable_sku: ApplicableSku,
    pub hourly_rate: f64,
    pub total_cost: f64,
    pub currency: String,
    pub details: UsageDetails,
}

fn matches_tier(description: &str, vcpus: u32) -> bool {
    let description = description.to_lowercase();
    (description.contains("up to 4 vcpu") && vcpus <= SMALL_TIER_MAX_VCPUS)
        || (description.contains("more than 4 vcpu") && vcpus > SMALL_TIER_MAX_VCPUS)
}

/// Pick the per-vCPU-tier SKU and price `hours` of usage with its first rate
/// tier
pub fn estimate(skus: &[SkuPrice], vcpus: u32, hours: f64) -> Result<SkuEstimate, AppError> {
    if vcpus == 0 {
        return Err(AppError::Validation("vcpus must be at least 1".to_string()));
    }
    if !hours.is_finite() || hours < 0.0 {
        return Err(AppError::Validation(format!(
            "hours must be greater than or equal to 0 (got {})",
            hours
        )));
    }

    let sku = skus
        .iter()
        .find(|sku| matches_tier(&sku.description, vcpus))
        .ok_or_else(|| {
            AppError::Validation(format!(
                "No applicable SKU found for {} vCPUs",
                vcpus
            ))
        })?;

    let expression = sku
        .pricing_info
        .pricing_expression
        .as_ref()
        .filter(|e| !e.tiered_rates.is_empty())
        .ok_or_else(|| {
            AppError::Validation(format!(
                "No pricing rate information found for SKU {}",
                sku.sku_id
            ))
        })?;

    let unit_price = &expression.tiered_rates[0].unit_price;
    let hourly_rate = unit_price.as_f64();
    let currency = if unit_price.currency_code.is_empty() {
        "USD".to_string()
    } else {
        unit_price.currency_code.clone()
    };

    Ok(SkuEstimate {
        input_parameters: EstimateInput { vcpus, hours },
        applicable_sku: ApplicableSku {
            sku_id: sku.sku_id.clone(),
            description: sku.description.clone(),
        },
        hourly_rate,
        total_cost: hourly_rate * hours,
        currency,
        details: UsageDetails {
            usage_unit: expression.usage_unit.clone(),
            usage_unit_description: expression.usage_unit_description.clone(),
            base_unit: expression.base_unit.clone(),
            base_unit_description: expression.base_unit_description.clone(),
        },
    })
}
