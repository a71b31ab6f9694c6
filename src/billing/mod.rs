//! Cloud Billing Catalog access: the live-catalog side of the service, kept
//! separate from the table-driven pricing path.

pub mod client;
pub mod estimate;
pub mod models;

pub use client::{build_client, list_services, search, service_pricing};
pub use estimate::{estimate, EstimateRequest, SkuEstimate};
pub use models::{ServiceInfo, SkuPrice};
