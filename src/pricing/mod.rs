pub mod cache;
pub mod calculator;
pub mod compare;
pub mod models;
pub mod recommend;
pub mod resolver;
pub mod tables;
pub mod trends;

pub use cache::{CacheEntryStatus, PriceCache, DEFAULT_TTL};
pub use calculator::CostCalculator;
pub use compare::{compare, Comparison, ComparisonSummary};
pub use models::{ComputeRequest, PriceResponse, PriceSource, PricingKey, PricingResult};
pub use recommend::{recommend, Recommendation, WorkloadType};
pub use resolver::{PriceResolver, StaticPriceResolver};
