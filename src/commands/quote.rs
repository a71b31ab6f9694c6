use anyhow::Result;
use cloud_price_calculator::pricing::{
    ComputeRequest, CostCalculator, PriceCache, PriceResponse, StaticPriceResolver, DEFAULT_TTL,
};
use std::sync::Arc;

/// Price a single request against the static tables without starting the
/// server
pub fn quote(request: &ComputeRequest) -> Result<PriceResponse> {
    let cache = Arc::new(PriceCache::new(Arc::new(StaticPriceResolver), DEFAULT_TTL));
    let calculator = CostCalculator::new(cache);
    Ok(calculator.calculate(request)?)
}

/// Execute the quote command, printing the priced response as JSON
pub fn execute(request: ComputeRequest) -> Result<()> {
    let response = quote(&request)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
