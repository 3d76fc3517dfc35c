//! Net worth domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time net worth with its component sums.
///
/// Assets: bank balances (negative balances floored to zero for this
/// computation only), stock holdings at current prices, active term-deposit
/// principals. Liabilities: active loan balances and card outstandings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthBreakdown {
    pub net_worth: Decimal,
    pub total_bank_balance: Decimal,
    pub total_stock_value: Decimal,
    pub total_fd_value: Decimal,
    pub total_loan_liability: Decimal,
    pub total_credit_card_liability: Decimal,
}
