//! Analyst-recommendation sentiment provider.
//!
//! Reads the Finnhub `/stock/recommendation` endpoint and condenses the
//! latest analyst rating counts into a directional signal: bullish versus
//! bearish score comparison, with `|bull - bear| / total` as confidence.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::market::market_errors::MarketDataError;
use crate::market::sentiment_model::{TrendDirection, TrendSignal};
use crate::market::sentiment_traits::SentimentProviderTrait;

const BASE_URL: &str = "https://finnhub.io/api/v1";
const SOURCE: &str = "Analyst Sentiment";

pub struct AnalystRatingsProvider {
    client: Client,
    token: String,
}

impl AnalystRatingsProvider {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            token,
        }
    }
}

/// One period of analyst recommendation counts, latest first in the response.
#[derive(Debug, Deserialize)]
struct RecommendationEntry {
    #[serde(default)]
    buy: u32,
    #[serde(default)]
    hold: u32,
    #[serde(default)]
    sell: u32,
    #[serde(default, rename = "strongBuy")]
    strong_buy: u32,
    #[serde(default, rename = "strongSell")]
    strong_sell: u32,
    #[serde(default)]
    #[allow(dead_code)]
    period: String,
}

#[async_trait]
impl SentimentProviderTrait for AnalystRatingsProvider {
    fn name(&self) -> &'static str {
        "ANALYST_RATINGS"
    }

    async fn directional_trend(
        &self,
        symbol: &str,
    ) -> std::result::Result<TrendSignal, MarketDataError> {
        let symbol = symbol.to_uppercase();
        let url = format!("{}/stock/recommendation", BASE_URL);

        let response = self
            .client
            .get(&url)
            .query(&[("symbol", symbol.as_str()), ("token", self.token.as_str())])
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MarketDataError::ProviderError(format!(
                "Recommendation API error: {}",
                response.status()
            )));
        }

        let entries: Vec<RecommendationEntry> = response
            .json()
            .await
            .map_err(|e| MarketDataError::ProviderError(format!("Failed to parse ratings: {e}")))?;

        let Some(latest) = entries.first() else {
            return Ok(TrendSignal::neutral(symbol, SOURCE));
        };

        let bullish = latest.strong_buy + latest.buy;
        let bearish = latest.strong_sell + latest.sell;
        let total = bullish + bearish + latest.hold;

        let direction = match bullish.cmp(&bearish) {
            std::cmp::Ordering::Greater => TrendDirection::Up,
            std::cmp::Ordering::Less => TrendDirection::Down,
            std::cmp::Ordering::Equal => TrendDirection::Sideways,
        };
        let confidence = if total > 0 {
            f64::from(bullish.abs_diff(bearish)) / f64::from(total)
        } else {
            0.0
        };

        Ok(TrendSignal {
            symbol,
            direction,
            confidence,
            source: SOURCE.to_string(),
        })
    }
}
