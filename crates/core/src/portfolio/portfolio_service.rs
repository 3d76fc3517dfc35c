//! Trading service implementation.

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::portfolio_model::{HoldingView, Position};
use super::portfolio_traits::{PortfolioServiceTrait, PositionRepositoryTrait};
use crate::accounts::AccountRepositoryTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::ledger::{LedgerRepositoryTrait, NewTransaction, TransactionType};
use crate::market::StockRepositoryTrait;
use crate::profiles::ProfileRepositoryTrait;

/// Service executing buys and sells against an owner's market.
pub struct PortfolioService {
    positions: Arc<dyn PositionRepositoryTrait>,
    stocks: Arc<dyn StockRepositoryTrait>,
    accounts: Arc<dyn AccountRepositoryTrait>,
    ledger: Arc<dyn LedgerRepositoryTrait>,
    profiles: Arc<dyn ProfileRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(
        positions: Arc<dyn PositionRepositoryTrait>,
        stocks: Arc<dyn StockRepositoryTrait>,
        accounts: Arc<dyn AccountRepositoryTrait>,
        ledger: Arc<dyn LedgerRepositoryTrait>,
        profiles: Arc<dyn ProfileRepositoryTrait>,
    ) -> Self {
        Self {
            positions,
            stocks,
            accounts,
            ledger,
            profiles,
        }
    }

    fn ensure_positive_quantity(quantity: Decimal) -> Result<()> {
        if quantity <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Quantity must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn buy_stock(
        &self,
        owner_id: &str,
        stock_id: &str,
        quantity: Decimal,
        account_id: &str,
    ) -> Result<Position> {
        Self::ensure_positive_quantity(quantity)?;
        let profile = self.profiles.get_by_owner(owner_id)?;
        let stock = self.stocks.get_by_id(owner_id, stock_id)?;
        let mut account = self.accounts.get_by_id(owner_id, account_id)?;

        let cost = stock.current_price * quantity;
        if account.balance < cost {
            return Err(Error::InsufficientFunds(format!(
                "Buying {} {} costs {}",
                quantity, stock.symbol, cost
            )));
        }

        account.balance -= cost;
        self.accounts.save(&account).await?;

        let position = match self.positions.find(owner_id, stock_id)? {
            Some(mut position) => {
                position.apply_buy(quantity, stock.current_price);
                position
            }
            None => Position::open(owner_id, stock_id, quantity, stock.current_price),
        };
        self.positions.upsert(&position).await?;

        self.ledger
            .append(vec![NewTransaction::new(
                owner_id,
                account_id,
                TransactionType::Investment,
                -cost,
                format!("Bought {} {} @ {}", quantity, stock.symbol, stock.current_price),
                profile.simulation_date,
            )])
            .await?;

        debug!(
            "Owner {} bought {} {} @ {}",
            owner_id, quantity, stock.symbol, stock.current_price
        );
        Ok(position)
    }

    async fn sell_stock(
        &self,
        owner_id: &str,
        stock_id: &str,
        quantity: Decimal,
        account_id: &str,
    ) -> Result<()> {
        Self::ensure_positive_quantity(quantity)?;
        let profile = self.profiles.get_by_owner(owner_id)?;
        let stock = self.stocks.get_by_id(owner_id, stock_id)?;
        let mut account = self.accounts.get_by_id(owner_id, account_id)?;

        let Some(mut position) = self.positions.find(owner_id, stock_id)? else {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Not enough shares to sell".to_string(),
            )));
        };
        if position.quantity < quantity {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Not enough shares to sell".to_string(),
            )));
        }

        let proceeds = stock.current_price * quantity;
        account.balance += proceeds;
        self.accounts.save(&account).await?;

        position.apply_sell(quantity);
        if position.is_empty() {
            self.positions.delete(&position.id).await?;
        } else {
            self.positions.upsert(&position).await?;
        }

        self.ledger
            .append(vec![NewTransaction::new(
                owner_id,
                account_id,
                TransactionType::Investment,
                proceeds,
                format!("Sold {} {} @ {}", quantity, stock.symbol, stock.current_price),
                profile.simulation_date,
            )])
            .await?;

        Ok(())
    }

    fn get_holdings(&self, owner_id: &str) -> Result<Vec<HoldingView>> {
        let stocks = self.stocks.list_by_owner(owner_id)?;
        let by_id: HashMap<&str, &crate::market::Stock> =
            stocks.iter().map(|s| (s.id.as_str(), s)).collect();

        let mut holdings = Vec::new();
        for position in self.positions.list_by_owner(owner_id)? {
            let Some(stock) = by_id.get(position.stock_id.as_str()) else {
                continue;
            };
            let current_value = stock.current_price * position.quantity;
            let invested_value = position.average_buy_price * position.quantity;
            let unrealized_gain = current_value - invested_value;
            let unrealized_gain_percent = if invested_value.is_zero() {
                Decimal::ZERO
            } else {
                unrealized_gain / invested_value * crate::constants::PERCENT
            };
            holdings.push(HoldingView {
                symbol: stock.symbol.clone(),
                current_price: stock.current_price,
                current_value,
                invested_value,
                unrealized_gain,
                unrealized_gain_percent,
                position,
            });
        }
        Ok(holdings)
    }
}
