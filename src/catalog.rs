//! Static provider catalog: regions and instance families served by the
//! discovery endpoints.

use crate::provider::CloudProvider;
use serde::{Serialize, Serializer};

/// Family name and its instance types
pub type InstanceFamily = (&'static str, &'static [&'static str]);

#[derive(Debug, Clone, Serialize)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstanceCatalog {
    pub provider: CloudProvider,
    #[serde(serialize_with = "serialize_families")]
    pub instance_families: Vec<InstanceFamily>,
    pub storage_types: &'static [&'static str],
}

/// Region codes advertised by `/providers`
pub fn region_codes(provider: CloudProvider) -> &'static [&'static str] {
    match provider {
        CloudProvider::Aws => &[
            "us-east-1",
            "us-east-2",
            "us-west-1",
            "us-west-2",
            "eu-west-1",
            "eu-central-1",
            "ap-southeast-1",
            "ap-northeast-1",
        ],
        CloudProvider::Gcp => &[
            "us-central1",
            "us-east1",
            "us-west1",
            "europe-west1",
            "asia-east1",
            "australia-southeast1",
        ],
        CloudProvider::Azure => &[
            "eastus",
            "eastus2",
            "westus",
            "westus2",
            "centralus",
            "westeurope",
            "northeurope",
            "japaneast",
            "southeastasia",
            "australiaeast",
            "brazilsouth",
            "canadacentral",
            "uksouth",
        ],
    }
}

const fn region(code: &'static str, name: &'static str, location: &'static str) -> Region {
    Region { code, name, location }
}

/// Region metadata served by `/regions/{provider}`
pub fn regions(provider: CloudProvider) -> Vec<Region> {
    const NA: &str = "North America";
    const EU: &str = "Europe";
    const AP: &str = "Asia Pacific";

    match provider {
        CloudProvider::Aws => vec![
            region("us-east-1", "US East (N. Virginia)", NA),
            region("us-east-2", "US East (Ohio)", NA),
            region("us-west-1", "US West (N. California)", NA),
            region("us-west-2", "US West (Oregon)", NA),
            region("eu-west-1", "Europe (Ireland)", EU),
            region("eu-central-1", "Europe (Frankfurt)", EU),
            region("ap-southeast-1", "Asia Pacific (Singapore)", AP),
            region("ap-northeast-1", "Asia Pacific (Tokyo)", AP),
        ],
        CloudProvider::Gcp => vec![
            region("us-central1", "Iowa", NA),
            region("us-east1", "South Carolina", NA),
            region("us-west1", "Oregon", NA),
            region("europe-west1", "Belgium", EU),
            region("asia-east1", "Taiwan", AP),
            region("australia-southeast1", "Sydney", AP),
        ],
        CloudProvider::Azure => vec![
            region("eastus", "East US", NA),
            region("eastus2", "East US 2", NA),
            region("westus", "West US", NA),
            region("westus2", "West US 2", NA),
            region("centralus", "Central US", NA),
            region("westeurope", "West Europe", EU),
            region("northeurope", "North Europe", EU),
            region("uksouth", "UK South", EU),
            region("japaneast", "Japan East", AP),
            region("southeastasia", "Southeast Asia", AP),
            region("australiaeast", "Australia East", AP),
        ],
    }
}

/// Instance families and storage types served by `/instances/{provider}`
pub fn instances(provider: CloudProvider) -> InstanceCatalog {
    let instance_families = match provider {
        CloudProvider::Aws => vec![
            family(
                "general_purpose",
                &["t3.nano", "t3.micro", "t3.small", "t3.medium", "t3.large", "m5.large", "m5.xlarge"],
            ),
            family("compute_optimized", &["c5.large", "c5.xlarge", "c5.2xlarge"]),
            family("memory_optimized", &["r5.large", "r5.xlarge", "r5.2xlarge"]),
        ],
        CloudProvider::Gcp => vec![
            family(
                "general_purpose",
                &["e2-micro", "e2-small", "e2-medium", "e2-standard-2", "e2-standard-4"],
            ),
            family("compute_optimized", &["c2-standard-4", "c2-standard-8"]),
            family(
                "memory_optimized",
                &["n1-standard-1", "n1-standard-2", "n2-standard-2", "n2-standard-4"],
            ),
        ],
        CloudProvider::Azure => vec![
            family(
                "burstable",
                &["Standard_B1s", "Standard_B1ms", "Standard_B2s", "Standard_B2ms", "Standard_B4ms"],
            ),
            family(
                "general_purpose",
                &[
                    "Standard_D2s_v3",
                    "Standard_D4s_v3",
                    "Standard_D2s_v4",
                    "Standard_D4s_v4",
                    "Standard_D2s_v5",
                    "Standard_D4s_v5",
                ],
            ),
            family("compute_optimized", &["Standard_F2s_v2", "Standard_F4s_v2", "Standard_F8s_v2"]),
            family(
                "memory_optimized",
                &[
                    "Standard_E2s_v3",
                    "Standard_E4s_v3",
                    "Standard_E2s_v4",
                    "Standard_E4s_v4",
                    "Standard_E2s_v5",
                    "Standard_E4s_v5",
                ],
            ),
            family("high_memory", &["Standard_M8ms", "Standard_M16ms", "Standard_M32ms"]),
        ],
    };

    InstanceCatalog {
        provider,
        instance_families,
        storage_types: storage_types(provider),
    }
}

pub fn storage_types(provider: CloudProvider) -> &'static [&'static str] {
    match provider {
        CloudProvider::Aws => &["gp3", "gp2", "io1", "io2", "st1", "sc1"],
        CloudProvider::Gcp => &["pd-standard", "pd-ssd", "pd-balanced"],
        CloudProvider::Azure => &["Standard_LRS", "Standard_GRS", "StandardSSD_LRS", "Premium_LRS", "UltraSSD_LRS"],
    }
}

fn family(name: &'static str, instances: &'static [&'static str]) -> InstanceFamily {
    (name, instances)
}

fn serialize_families<S: Serializer>(families: &[InstanceFamily], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(families.iter().map(|(name, instances)| (name, instances)))
}
