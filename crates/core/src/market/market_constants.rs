use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::market_model::TrendKind;

/// Cap on the daily drift applied to any stock, to keep long simulations
/// from compounding into unrealistic exponential growth (0.05% daily is
/// roughly 13% annualized).
pub const MAX_DAILY_DRIFT: f64 = 0.0005;

/// Additional daily drift contributed by a directional analyst signal.
pub const SENTIMENT_DRIFT_BIAS: f64 = 0.00005;

/// Simulated prices never fall below this floor.
pub const PRICE_FLOOR: Decimal = dec!(0.01);

/// How long a fetched sentiment signal stays fresh.
pub const SENTIMENT_CACHE_TTL_SECS: u64 = 24 * 60 * 60;

/// Catalog entry used to seed a new owner's market.
#[derive(Debug, Clone, Copy)]
pub struct MarketSeed {
    pub symbol: &'static str,
    pub name: &'static str,
    pub sector: &'static str,
    pub base_price: Decimal,
    pub volatility: f64,
    pub trend: TrendKind,
    pub growth_bias: f64,
}

/// The fixed market every owner starts with.
pub const DEFAULT_MARKET: [MarketSeed; 5] = [
    MarketSeed {
        symbol: "TECHX",
        name: "TechX Innovations",
        sector: "Technology",
        base_price: dec!(150),
        volatility: 0.02,
        trend: TrendKind::Bullish,
        growth_bias: 0.001,
    },
    MarketSeed {
        symbol: "FINCORP",
        name: "FinCorp Global",
        sector: "Finance",
        base_price: dec!(45),
        volatility: 0.015,
        trend: TrendKind::Neutral,
        growth_bias: 0.0002,
    },
    MarketSeed {
        symbol: "MEDLIFE",
        name: "MedLife Pharma",
        sector: "Healthcare",
        base_price: dec!(80),
        volatility: 0.01,
        trend: TrendKind::Bullish,
        growth_bias: 0.0005,
    },
    MarketSeed {
        symbol: "AUTOZ",
        name: "AutoZ Motors",
        sector: "Automotive",
        base_price: dec!(120),
        volatility: 0.025,
        trend: TrendKind::Bearish,
        growth_bias: -0.0005,
    },
    MarketSeed {
        symbol: "GREENNRG",
        name: "Green Energy Corp",
        sector: "Energy",
        base_price: dec!(60),
        volatility: 0.03,
        trend: TrendKind::Bullish,
        growth_bias: 0.002,
    },
];
