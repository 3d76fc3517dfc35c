//! Stock repository over the in-memory store.

use async_trait::async_trait;

use finsim_core::errors::{Error, Result};
use finsim_core::market::{Stock, StockRepositoryTrait};

use crate::store::MemoryStore;

#[async_trait]
impl StockRepositoryTrait for MemoryStore {
    async fn create(&self, stock: Stock) -> Result<Stock> {
        self.stocks.insert(stock.id.clone(), stock.clone());
        Ok(stock)
    }

    fn get_by_id(&self, owner_id: &str, stock_id: &str) -> Result<Stock> {
        self.stocks
            .get(stock_id)
            .filter(|s| s.owner_id == owner_id)
            .map(|s| s.clone())
            .ok_or_else(|| Error::NotFound(format!("Stock {stock_id} not found")))
    }

    fn get_by_symbol(&self, owner_id: &str, symbol: &str) -> Result<Option<Stock>> {
        Ok(self
            .stocks
            .iter()
            .find(|s| s.owner_id == owner_id && s.symbol == symbol)
            .map(|s| s.clone()))
    }

    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Stock>> {
        let mut stocks: Vec<Stock> = self
            .stocks
            .iter()
            .filter(|s| s.owner_id == owner_id)
            .map(|s| s.clone())
            .collect();
        stocks.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        Ok(stocks)
    }

    async fn save(&self, stock: &Stock) -> Result<()> {
        self.stocks.insert(stock.id.clone(), stock.clone());
        Ok(())
    }

    async fn save_all(&self, stocks: &[Stock]) -> Result<()> {
        for stock in stocks {
            self.stocks.insert(stock.id.clone(), stock.clone());
        }
        Ok(())
    }
}
