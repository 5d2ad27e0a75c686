//! Market Data Module
//!
//! Read-only pass-through to the external commodity-price API. This crate
//! has no knowledge of accounts or sessions; an upstream failure here is a
//! generic service error and never touches identity state.

pub mod client;
pub mod error;
pub mod presentation;

pub use client::{MarketDataClient, PriceFilter, PriceRecord};
pub use error::{MarketError, MarketResult};
pub use presentation::router::market_router;
