//! Cloud Billing Catalog wire types (the subset this service reads)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceList {
    #[serde(default)]
    pub services: Vec<CatalogService>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogService {
    /// Resource name, `services/{service_id}`
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub service_description: String,
}

impl CatalogService {
    pub fn service_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuList {
    #[serde(default)]
    pub skus: Vec<Sku>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    #[serde(default)]
    pub sku_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: SkuCategory,
    #[serde(default)]
    pub service_regions: Vec<String>,
    #[serde(default)]
    pub pricing_info: Vec<PricingInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuCategory {
    #[serde(default)]
    pub service_display_name: String,
    #[serde(default)]
    pub resource_family: String,
    #[serde(default)]
    pub resource_group: String,
    #[serde(default)]
    pub usage_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_expression: Option<PricingExpression>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingExpression {
    #[serde(default)]
    pub usage_unit: String,
    #[serde(default)]
    pub usage_unit_description: String,
    #[serde(default)]
    pub base_unit: String,
    #[serde(default)]
    pub base_unit_description: String,
    #[serde(default)]
    pub tiered_rates: Vec<TieredRate>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TieredRate {
    #[serde(default)]
    pub start_usage_amount: f64,
    #[serde(default)]
    pub unit_price: Money,
}

/// Google `Money`: whole `units` (a decimal string on the wire) plus `nanos`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    #[serde(default)]
    pub currency_code: String,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub nanos: i64,
}

impl Money {
    pub fn as_f64(&self) -> f64 {
        let units: i64 = self.units.trim().parse().unwrap_or(0);
        units as f64 + self.nanos as f64 / 1_000_000_000.0
    }
}

/// Service summary returned by `/catalog/services`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service_id: String,
    pub display_name: String,
    pub description: String,
}

impl From<&CatalogService> for ServiceInfo {
    fn from(service: &CatalogService) -> Self {
        Self {
            service_id: service.service_id().to_string(),
            display_name: service.display_name.clone(),
            description: service.service_description.clone(),
        }
    }
}

/// SKU price entry returned by `/catalog/pricing/{service_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuPrice {
    pub sku_id: String,
    pub description: String,
    pub service_display_name: String,
    pub pricing_info: PricingInfo,
    pub service_regions: Vec<String>,
    pub category: SkuCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_conversion() {
        let money = Money {
            currency_code: "USD".to_string(),
            units: "1".to_string(),
            nanos: 80_000_000,
        };
        assert_eq!(money.as_f64(), 1.08);

        let money = Money {
            currency_code: "USD".to_string(),
            units: String::new(),
            nanos: 270_000_000,
        };
        assert_eq!(money.as_f64(), 0.27);
    }

    #[test]
    fn test_service_id_from_resource_name() {
        let service = CatalogService {
            name: "services/6F81-5844-456A".to_string(),
            ..Default::default()
        };
        assert_eq!(service.service_id(), "6F81-5844-456A");
    }

    #[test]
    fn test_sku_deserializes_camel_case() {
        let sku: Sku = serde_json::from_str(
            r#"{
                "skuId": "10D7-9E13-7F22",
                "description": "Licensing Fee on VM with up to 4 VCPU",
                "category": {"resourceFamily": "License", "usageType": "OnDemand"},
                "serviceRegions": ["global"],
                "pricingInfo": [{
                    "pricingExpression": {
                        "usageUnit": "h",
                        "tieredRates": [{"startUsageAmount": 0, "unitPrice": {"currencyCode": "USD", "units": "1", "nanos": 80000000}}]
                    }
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(sku.sku_id, "10D7-9E13-7F22");
        assert_eq!(sku.service_regions, vec!["global"]);
        let expression = sku.pricing_info[0].pricing_expression.as_ref().unwrap();
        assert_eq!(expression.tiered_rates[0].unit_price.as_f64(), 1.08);
    }
}
