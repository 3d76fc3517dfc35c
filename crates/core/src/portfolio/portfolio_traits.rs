use async_trait::async_trait;
use rust_decimal::Decimal;

use super::portfolio_model::{HoldingView, Position};
use crate::errors::Result;

/// Trait defining the contract for position storage.
#[async_trait]
pub trait PositionRepositoryTrait: Send + Sync {
    fn find(&self, owner_id: &str, stock_id: &str) -> Result<Option<Position>>;
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Position>>;
    async fn upsert(&self, position: &Position) -> Result<()>;
    async fn delete(&self, position_id: &str) -> Result<()>;
}

/// Trait defining the contract for trading operations.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    async fn buy_stock(
        &self,
        owner_id: &str,
        stock_id: &str,
        quantity: Decimal,
        account_id: &str,
    ) -> Result<Position>;
    async fn sell_stock(
        &self,
        owner_id: &str,
        stock_id: &str,
        quantity: Decimal,
        account_id: &str,
    ) -> Result<()>;
    fn get_holdings(&self, owner_id: &str) -> Result<Vec<HoldingView>>;
}
