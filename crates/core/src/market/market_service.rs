//! Market service implementation.

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use std::sync::Arc;

use super::market_constants::DEFAULT_MARKET;
use super::market_model::{Candle, Stock};
use super::market_traits::{MarketServiceTrait, PriceFeedTrait, StockRepositoryTrait};
use crate::errors::Result;
use crate::profiles::ProfileRepositoryTrait;

/// Service managing the per-owner stock market.
///
/// When a price feed is configured, newly introduced stocks start from the
/// feed's latest quote and carry its historical candles; otherwise the
/// catalog base price is used. Feed failures degrade to the catalog values.
pub struct MarketService {
    stocks: Arc<dyn StockRepositoryTrait>,
    profiles: Arc<dyn ProfileRepositoryTrait>,
    price_feed: Option<Arc<dyn PriceFeedTrait>>,
}

impl MarketService {
    pub fn new(
        stocks: Arc<dyn StockRepositoryTrait>,
        profiles: Arc<dyn ProfileRepositoryTrait>,
        price_feed: Option<Arc<dyn PriceFeedTrait>>,
    ) -> Self {
        Self {
            stocks,
            profiles,
            price_feed,
        }
    }
}

#[async_trait]
impl MarketServiceTrait for MarketService {
    async fn initialize_owner_market(&self, owner_id: &str) -> Result<Vec<Stock>> {
        let profile = self.profiles.get_by_owner(owner_id)?;
        let mut created = Vec::new();

        for seed in DEFAULT_MARKET {
            if self.stocks.get_by_symbol(owner_id, seed.symbol)?.is_some() {
                continue;
            }

            let (price, history) = match &self.price_feed {
                Some(feed) => match feed.initial_quote(seed.symbol).await {
                    Ok(quote) => (quote.price, quote.candles),
                    Err(e) => {
                        warn!(
                            "Price feed failed for {}, seeding from catalog: {}",
                            seed.symbol, e
                        );
                        (
                            seed.base_price,
                            vec![Candle::flat(profile.simulation_date, seed.base_price)],
                        )
                    }
                },
                None => (
                    seed.base_price,
                    vec![Candle::flat(profile.simulation_date, seed.base_price)],
                ),
            };

            let stock = Stock {
                id: uuid::Uuid::new_v4().to_string(),
                owner_id: owner_id.to_string(),
                symbol: seed.symbol.to_string(),
                name: seed.name.to_string(),
                sector: seed.sector.to_string(),
                current_price: price,
                volatility: seed.volatility,
                growth_bias: seed.growth_bias,
                trend: seed.trend,
                last_updated: Utc::now(),
                history,
                simulated_history: Vec::new(),
            };
            created.push(self.stocks.create(stock).await?);
        }

        debug!(
            "Initialized market for owner {}: {} new stocks",
            owner_id,
            created.len()
        );
        Ok(created)
    }

    fn list_stocks(&self, owner_id: &str) -> Result<Vec<Stock>> {
        self.stocks.list_by_owner(owner_id)
    }

    fn get_stock(&self, owner_id: &str, stock_id: &str) -> Result<Stock> {
        self.stocks.get_by_id(owner_id, stock_id)
    }
}
