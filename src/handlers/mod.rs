pub mod billing;
pub mod cache;
pub mod catalog;
pub mod health;
pub mod metrics_handler;
pub mod pricing;

use crate::config::Config;
use crate::error::AppError;
use crate::pricing::{CostCalculator, PriceCache};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use std::sync::Arc;

/// State shared by all pricing and catalog handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub calculator: CostCalculator,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Arc<Config>, calculator: CostCalculator, http_client: reqwest::Client) -> Self {
        Self {
            config,
            calculator,
            http_client,
        }
    }

    pub fn cache(&self) -> &Arc<PriceCache> {
        self.calculator.cache()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}
