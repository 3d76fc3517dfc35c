//! Stochastic daily price model.
//!
//! A bounded geometric random walk with exogenous analyst bias: each trading
//! day every stock moves by `drift + volatility * Z`, where `Z` is a
//! standard-normal shock drawn with the Box-Muller transform. The walk is
//! not seeded deterministically; tests pin down the degenerate
//! (zero-volatility) cases and distributional properties instead.

use chrono::{Datelike, NaiveDate, Weekday};
use num_traits::FromPrimitive;
use rand::Rng;
use rust_decimal::Decimal;

use super::market_constants::{MAX_DAILY_DRIFT, PRICE_FLOOR, SENTIMENT_DRIFT_BIAS};
use super::market_model::{PricePoint, Stock};
use super::sentiment_model::TrendDirection;

/// Prices only move Monday through Friday of the simulated calendar.
pub fn is_trading_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Draws a standard-normal variate via the Box-Muller transform.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // 1 - U keeps the first uniform away from zero so ln() stays finite.
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Moves a stock to its next daily price and appends the history point.
///
/// The caller is responsible for the trading-day gate; this function always
/// applies one step.
pub fn advance_price<R: Rng + ?Sized>(
    stock: &mut Stock,
    sentiment: Option<TrendDirection>,
    today: NaiveDate,
    rng: &mut R,
) {
    let mut drift = stock.growth_bias.clamp(-MAX_DAILY_DRIFT, MAX_DAILY_DRIFT);
    match sentiment {
        Some(TrendDirection::Up) => drift += SENTIMENT_DRIFT_BIAS,
        Some(TrendDirection::Down) => drift -= SENTIMENT_DRIFT_BIAS,
        Some(TrendDirection::Sideways) | None => {}
    }

    let shock = stock.volatility * standard_normal(rng);
    let change = Decimal::from_f64(drift + shock).unwrap_or_default();
    let new_price = (stock.current_price * (Decimal::ONE + change)).max(PRICE_FLOOR);

    stock.current_price = new_price;
    stock.simulated_history.push(PricePoint {
        date: today,
        price: new_price,
    });
}
