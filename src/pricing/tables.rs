//! Static on-demand rate tables.
//!
//! Compute rates are USD per hour, storage rates are USD per GB-month.
//! Regional multipliers scale the base rate; a region missing from a
//! multiplier table prices at 1.0.

use crate::provider::CloudProvider;

type RateTable = &'static [(&'static str, f64)];

/// Rates used when a lookup misses its table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackRates {
    pub compute_hourly: f64,
    pub storage_monthly_gb: f64,
}

/// Every table needed to price one provider
#[derive(Debug)]
pub struct ProviderTables {
    pub compute_rates: RateTable,
    pub compute_multipliers: RateTable,
    pub storage_rates: RateTable,
    pub storage_multipliers: RateTable,
    pub fallback: FallbackRates,
}

/// Fallback rates keyed by provider
pub fn fallback_rates(provider: CloudProvider) -> FallbackRates {
    match provider {
        CloudProvider::Aws => FallbackRates { compute_hourly: 0.05, storage_monthly_gb: 0.08 },
        CloudProvider::Gcp => FallbackRates { compute_hourly: 0.03, storage_monthly_gb: 0.04 },
        CloudProvider::Azure => FallbackRates { compute_hourly: 0.04, storage_monthly_gb: 0.06 },
    }
}

pub fn tables_for(provider: CloudProvider) -> ProviderTables {
    match provider {
        // AWS has no regional multiplier tables
        CloudProvider::Aws => ProviderTables {
            compute_rates: AWS_COMPUTE,
            compute_multipliers: &[],
            storage_rates: AWS_STORAGE,
            storage_multipliers: &[],
            fallback: fallback_rates(provider),
        },
        CloudProvider::Gcp => ProviderTables {
            compute_rates: GCP_COMPUTE,
            compute_multipliers: GCP_COMPUTE_MULTIPLIERS,
            storage_rates: GCP_STORAGE,
            storage_multipliers: &[],
            fallback: fallback_rates(provider),
        },
        CloudProvider::Azure => ProviderTables {
            compute_rates: AZURE_COMPUTE,
            compute_multipliers: AZURE_COMPUTE_MULTIPLIERS,
            storage_rates: AZURE_STORAGE,
            storage_multipliers: AZURE_STORAGE_MULTIPLIERS,
            fallback: fallback_rates(provider),
        },
    }
}

pub fn lookup(table: RateTable, key: &str) -> Option<f64> {
    table.iter().find(|(name, _)| *name == key).map(|(_, rate)| *rate)
}

pub fn multiplier(table: RateTable, region: &str) -> f64 {
    lookup(table, region).unwrap_or(1.0)
}

const AWS_COMPUTE: RateTable = &[
    ("t3.nano", 0.0052),
    ("t3.micro", 0.0104),
    ("t3.small", 0.0208),
    ("t3.medium", 0.0416),
    ("t3.large", 0.0832),
    ("t3.xlarge", 0.1664),
    ("m5.large", 0.096),
    ("m5.xlarge", 0.192),
    ("m5.2xlarge", 0.384),
    ("c5.large", 0.085),
    ("c5.xlarge", 0.17),
    ("c5.2xlarge", 0.34),
    ("r5.large", 0.126),
    ("r5.xlarge", 0.252),
    ("r5.2xlarge", 0.504),
];

const AWS_STORAGE: RateTable = &[
    ("gp3", 0.08),
    ("gp2", 0.10),
    ("io1", 0.125),
    ("io2", 0.125),
    ("st1", 0.045),
    ("sc1", 0.025),
];

const GCP_COMPUTE: RateTable = &[
    ("e2-micro", 0.006),
    ("e2-small", 0.012),
    ("e2-medium", 0.024),
    ("e2-standard-2", 0.067),
    ("e2-standard-4", 0.134),
    ("n1-standard-1", 0.0475),
    ("n1-standard-2", 0.095),
    ("n1-standard-4", 0.19),
    ("n2-standard-2", 0.097),
    ("n2-standard-4", 0.194),
    ("c2-standard-4", 0.168),
    ("c2-standard-8", 0.336),
];

const GCP_COMPUTE_MULTIPLIERS: RateTable = &[
    ("us-central1", 1.0),
    ("us-east1", 1.0),
    ("us-west1", 1.0),
    ("europe-west1", 1.08),
    ("asia-east1", 1.08),
    ("australia-southeast1", 1.15),
];

const GCP_STORAGE: RateTable = &[("pd-standard", 0.04), ("pd-ssd", 0.17), ("pd-balanced", 0.10)];

const AZURE_COMPUTE: RateTable = &[
    // B-series (burstable)
    ("Standard_B1s", 0.0052),
    ("Standard_B1ms", 0.0104),
    ("Standard_B2s", 0.0208),
    ("Standard_B2ms", 0.0416),
    ("Standard_B4ms", 0.0832),
    ("Standard_B8ms", 0.1664),
    // D-series (general purpose)
    ("Standard_D2s_v3", 0.096),
    ("Standard_D4s_v3", 0.192),
    ("Standard_D8s_v3", 0.384),
    ("Standard_D2s_v4", 0.088),
    ("Standard_D4s_v4", 0.176),
    ("Standard_D8s_v4", 0.352),
    ("Standard_D2s_v5", 0.0832),
    ("Standard_D4s_v5", 0.1664),
    ("Standard_D8s_v5", 0.3328),
    // F-series (compute optimized)
    ("Standard_F2s_v2", 0.085),
    ("Standard_F4s_v2", 0.169),
    ("Standard_F8s_v2", 0.338),
    // E-series (memory optimized)
    ("Standard_E2s_v3", 0.126),
    ("Standard_E4s_v3", 0.252),
    ("Standard_E8s_v3", 0.504),
    ("Standard_E2s_v4", 0.120),
    ("Standard_E4s_v4", 0.240),
    ("Standard_E8s_v4", 0.480),
    ("Standard_E2s_v5", 0.1134),
    ("Standard_E4s_v5", 0.2268),
    ("Standard_E8s_v5", 0.4536),
    // M-series (high memory)
    ("Standard_M8ms", 2.0736),
    ("Standard_M16ms", 4.1472),
    ("Standard_M32ms", 8.2944),
];

const AZURE_COMPUTE_MULTIPLIERS: RateTable = &[
    ("eastus", 1.0),
    ("eastus2", 1.0),
    ("westus", 1.0),
    ("westus2", 1.0),
    ("centralus", 1.0),
    ("northcentralus", 1.0),
    ("southcentralus", 1.0),
    ("westcentralus", 1.0),
    ("westeurope", 1.08),
    ("northeurope", 1.08),
    ("uksouth", 1.10),
    ("ukwest", 1.10),
    ("francecentral", 1.09),
    ("germanywestcentral", 1.09),
    ("switzerlandnorth", 1.15),
    ("japaneast", 1.08),
    ("japanwest", 1.08),
    ("koreacentral", 1.08),
    ("koreasouth", 1.08),
    ("southeastasia", 1.08),
    ("eastasia", 1.08),
    ("australiaeast", 1.13),
    ("australiasoutheast", 1.13),
    ("brazilsouth", 1.25),
    ("canadacentral", 1.05),
    ("canadaeast", 1.05),
    ("southafricanorth", 1.14),
    ("uaenorth", 1.14),
    ("centralindia", 1.06),
    ("southindia", 1.08),
];

const AZURE_STORAGE: RateTable = &[
    // Standard HDD
    ("Standard_LRS", 0.045),
    ("Standard_GRS", 0.09),
    ("Standard_RAGRS", 0.11),
    ("Standard_ZRS", 0.054),
    ("Standard_GZRS", 0.12),
    ("Standard_RAGZRS", 0.15),
    // Standard SSD
    ("StandardSSD_LRS", 0.075),
    ("StandardSSD_GRS", 0.15),
    ("StandardSSD_RAGRS", 0.19),
    ("StandardSSD_ZRS", 0.09),
    ("StandardSSD_GZRS", 0.18),
    ("StandardSSD_RAGZRS", 0.225),
    // Premium / Ultra SSD
    ("Premium_LRS", 0.135),
    ("Premium_ZRS", 0.162),
    ("UltraSSD_LRS", 0.164),
];

const AZURE_STORAGE_MULTIPLIERS: RateTable = &[
    ("eastus", 1.0),
    ("eastus2", 1.0),
    ("westus", 1.0),
    ("westus2", 1.0),
    ("westeurope", 1.08),
    ("northeurope", 1.08),
    ("japaneast", 1.08),
    ("southeastasia", 1.08),
    ("australiaeast", 1.13),
    ("brazilsouth", 1.25),
];
