use async_trait::async_trait;

use super::market_errors::MarketDataError;
use super::market_model::{InitialQuote, Stock};
use crate::errors::Result;

/// Trait defining the contract for stock storage.
#[async_trait]
pub trait StockRepositoryTrait: Send + Sync {
    async fn create(&self, stock: Stock) -> Result<Stock>;
    fn get_by_id(&self, owner_id: &str, stock_id: &str) -> Result<Stock>;
    fn get_by_symbol(&self, owner_id: &str, symbol: &str) -> Result<Option<Stock>>;
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Stock>>;
    async fn save(&self, stock: &Stock) -> Result<()>;
    async fn save_all(&self, stocks: &[Stock]) -> Result<()>;
}

/// External price/history feed consulted once when a stock is introduced to
/// an owner's market. Not part of the daily simulation.
#[async_trait]
pub trait PriceFeedTrait: Send + Sync {
    fn name(&self) -> &'static str;
    async fn initial_quote(
        &self,
        symbol: &str,
    ) -> std::result::Result<InitialQuote, MarketDataError>;
}

/// Trait defining the contract for market operations.
#[async_trait]
pub trait MarketServiceTrait: Send + Sync {
    /// Seeds the default market for an owner. Idempotent per symbol.
    async fn initialize_owner_market(&self, owner_id: &str) -> Result<Vec<Stock>>;
    fn list_stocks(&self, owner_id: &str) -> Result<Vec<Stock>>;
    fn get_stock(&self, owner_id: &str, stock_id: &str) -> Result<Stock>;
}
