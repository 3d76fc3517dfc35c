//! Credit card domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

use super::credit_cards_constants::DEFAULT_CREDIT_LIMIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditCardStatus {
    Active,
    Blocked,
    Closed,
}

/// Domain model representing a credit card.
///
/// `available_credit + outstanding_balance` tracks `credit_limit` on a
/// best-effort basis; overdue interest and late fees are allowed to push the
/// pair past the limit transiently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub id: String,
    pub owner_id: String,
    pub card_name: String,
    pub card_number: String,
    pub credit_limit: Decimal,
    pub outstanding_balance: Decimal,
    pub available_credit: Decimal,
    /// Annual interest rate in percent.
    pub interest_rate: Decimal,
    /// Day of month statements are generated on.
    pub billing_day: u32,
    /// Days between the billing date and the payment due date.
    pub due_day_offset: i64,
    pub minimum_due_percent: Decimal,
    /// Outstanding balance snapshotted at the last billing date.
    pub statement_balance: Decimal,
    pub minimum_due: Decimal,
    /// Interest accrued over the card's lifetime.
    pub total_interest_paid: Decimal,
    pub missed_payments_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_statement_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_interest_applied_date: Option<NaiveDate>,
    pub status: CreditCardStatus,
    pub created_at: DateTime<Utc>,
}

impl CreditCard {
    pub fn is_active(&self) -> bool {
        self.status == CreditCardStatus::Active
    }

    /// Last four digits, for payment descriptions.
    pub fn masked_number(&self) -> &str {
        let n = self.card_number.len();
        &self.card_number[n.saturating_sub(4)..]
    }
}

/// Input model for issuing a new card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCreditCard {
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<Decimal>,
}

impl NewCreditCard {
    pub fn validate(&self) -> Result<()> {
        if self.owner_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "ownerId".to_string(),
            )));
        }
        if let Some(limit) = self.credit_limit {
            if limit <= Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Credit limit must be positive".to_string(),
                )));
            }
        }
        Ok(())
    }

    pub fn credit_limit_or_default(&self) -> Decimal {
        self.credit_limit.unwrap_or(DEFAULT_CREDIT_LIMIT)
    }
}
