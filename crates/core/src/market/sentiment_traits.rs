use async_trait::async_trait;
use std::collections::HashMap;

use super::market_errors::MarketDataError;
use super::sentiment_model::{TrendDirection, TrendSignal};

/// External analyst-recommendation feed.
#[async_trait]
pub trait SentimentProviderTrait: Send + Sync {
    fn name(&self) -> &'static str;
    async fn directional_trend(
        &self,
        symbol: &str,
    ) -> std::result::Result<TrendSignal, MarketDataError>;
}

/// Failure-tolerant sentiment lookup used by the simulation clock.
///
/// Implementations must never fail a day: a symbol that cannot be resolved
/// is simply absent from the returned map, which the price model treats as
/// no bias.
#[async_trait]
pub trait SentimentServiceTrait: Send + Sync {
    async fn directions(&self, symbols: &[String]) -> HashMap<String, TrendDirection>;
}
