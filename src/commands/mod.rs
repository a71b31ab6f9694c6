//! Command implementations for the CLI
//!
//! - start: run the pricing server
//! - quote: price one instance offline
//! - test: check configuration and sample prices
//! - config: configuration display and validation

pub mod config;
pub mod quote;
pub mod start;
