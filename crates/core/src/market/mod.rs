//! Market module - per-owner simulated stock market.
//!
//! Holds the stock entities, the stochastic daily price model, the external
//! analyst-sentiment feed (cached, failure-tolerant) and the one-time market
//! bootstrap for new owners.

mod market_constants;
mod market_errors;
mod market_model;
mod market_service;
mod market_traits;
mod price_model;
pub mod providers;
mod sentiment_model;
mod sentiment_service;
mod sentiment_traits;

// Re-export the public interface
pub use market_constants::*;
pub use market_errors::MarketDataError;
pub use market_model::{Candle, InitialQuote, NewStock, PricePoint, Stock, TrendKind};
pub use market_service::MarketService;
pub use market_traits::{MarketServiceTrait, PriceFeedTrait, StockRepositoryTrait};
pub use price_model::{advance_price, is_trading_day, standard_normal};
pub use sentiment_model::{TrendDirection, TrendSignal};
pub use sentiment_service::SentimentService;
pub use sentiment_traits::{SentimentProviderTrait, SentimentServiceTrait};

#[cfg(test)]
mod sentiment_service_tests;
