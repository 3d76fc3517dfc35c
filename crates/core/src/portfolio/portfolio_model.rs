//! Position domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A holding of one stock: quantity plus the volume-weighted average of all
/// buys. Created on first buy, removed when quantity reaches zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub owner_id: String,
    pub stock_id: String,
    pub quantity: Decimal,
    pub average_buy_price: Decimal,
}

impl Position {
    pub fn open(
        owner_id: impl Into<String>,
        stock_id: impl Into<String>,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: owner_id.into(),
            stock_id: stock_id.into(),
            quantity,
            average_buy_price: price,
        }
    }

    /// Folds a buy into the position, re-weighting the average price by
    /// traded value.
    pub fn apply_buy(&mut self, quantity: Decimal, price: Decimal) {
        let total_value = self.average_buy_price * self.quantity + price * quantity;
        self.quantity += quantity;
        self.average_buy_price = total_value / self.quantity;
    }

    /// Reduces the position by a sale. The average buy price is unchanged;
    /// the caller removes the position once it is empty.
    pub fn apply_sell(&mut self, quantity: Decimal) {
        self.quantity -= quantity;
    }

    pub fn is_empty(&self) -> bool {
        self.quantity.is_zero()
    }
}

/// A position enriched with its current market value and unrealized P&L.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingView {
    pub position: Position,
    pub symbol: String,
    pub current_price: Decimal,
    pub current_value: Decimal,
    pub invested_value: Decimal,
    pub unrealized_gain: Decimal,
    /// Percent gain relative to invested value; zero when nothing invested.
    pub unrealized_gain_percent: Decimal,
}
