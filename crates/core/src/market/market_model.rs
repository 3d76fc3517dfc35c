//! Stock domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Broad direction a stock's catalog entry classifies it under. Informational
/// only; the price model draws its bias from `growth_bias` to avoid double
/// counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendKind {
    Bullish,
    Bearish,
    Neutral,
}

/// One historical OHLCV bar sourced from a price feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

impl Candle {
    /// A flat bar, used when seeding a market without a price feed.
    pub fn flat(date: NaiveDate, price: Decimal) -> Self {
        Self {
            date,
            open: price,
            high: price,
            low: price,
            close: price,
            volume: 0,
        }
    }
}

/// One simulated daily closing price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: Decimal,
}

/// Domain model representing a stock in an owner's market.
///
/// Symbols are unique per owner; two owners each have their own "TECHX"
/// moving independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: String,
    pub owner_id: String,
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub current_price: Decimal,
    /// Daily volatility (sigma), a dimensionless ratio.
    pub volatility: f64,
    /// Small daily drift, clamped by the price model.
    pub growth_bias: f64,
    pub trend: TrendKind,
    pub last_updated: DateTime<Utc>,
    /// Bootstrap history from the price feed, before any simulation.
    pub history: Vec<Candle>,
    /// One point per simulated trading day.
    pub simulated_history: Vec<PricePoint>,
}

/// Input model for introducing a stock to an owner's market.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStock {
    pub owner_id: String,
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub initial_price: Decimal,
    pub volatility: f64,
    pub trend: TrendKind,
    pub growth_bias: f64,
}

impl NewStock {
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "symbol".to_string(),
            )));
        }
        if self.initial_price <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Initial price must be positive".to_string(),
            )));
        }
        if self.volatility < 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Volatility cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// First quote and history delivered by a price feed when a stock is
/// introduced to a market.
#[derive(Debug, Clone)]
pub struct InitialQuote {
    pub price: Decimal,
    pub candles: Vec<Candle>,
}
