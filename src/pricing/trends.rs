//! Simulated price history.
//!
//! There is no real historical data behind this: each point is the current
//! price with up to ±5% noise drawn from an RNG seeded with [`TREND_SEED`],
//! so identical inputs always produce the identical series.

use crate::pricing::models::round_to;
use chrono::{Duration, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

pub const TREND_SEED: u64 = 42;
pub const MAX_VARIATION: f64 = 0.05;
pub const MAX_TREND_DAYS: u32 = 365;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub hourly_price: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub min_price: f64,
    pub max_price: f64,
    pub avg_price: f64,
}

/// Generate `days` daily points ending the day before `today`
pub fn simulate(base_price: f64, days: u32, today: NaiveDate) -> Vec<TrendPoint> {
    let mut rng = StdRng::seed_from_u64(TREND_SEED);

    (0..days)
        .map(|i| {
            let date = today - Duration::days(i64::from(days - i));
            let variation: f64 = rng.gen_range(-MAX_VARIATION..=MAX_VARIATION);
            TrendPoint {
                date: date.format("%Y-%m-%d").to_string(),
                hourly_price: round_to(base_price * (1.0 + variation), 6),
                change_percent: round_to(variation * 100.0, 2),
            }
        })
        .collect()
}

pub fn summarize(points: &[TrendPoint]) -> Option<TrendSummary> {
    if points.is_empty() {
        return None;
    }

    let prices = points.iter().map(|p| p.hourly_price);
    let min_price = prices.clone().fold(f64::INFINITY, f64::min);
    let max_price = prices.clone().fold(f64::NEG_INFINITY, f64::max);
    let avg_price = prices.sum::<f64>() / points.len() as f64;

    Some(TrendSummary {
        min_price: round_to(min_price, 6),
        max_price: round_to(max_price, 6),
        avg_price: round_to(avg_price, 6),
    })
}
