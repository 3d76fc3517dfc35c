//! Account domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

use super::accounts_constants::DEFAULT_SAVINGS_INTEREST_RATE;

/// Bank account kind. Only `Savings` accounts accrue daily interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    Savings,
    Current,
}

/// Monthly standing instruction crediting the account on a fixed day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDepositPlan {
    pub amount: Decimal,
    pub day_of_month: u32,
    pub active: bool,
}

/// Domain model representing a bank account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub owner_id: String,
    pub bank_name: String,
    /// Globally unique; transfers address the destination by number.
    pub account_number: String,
    pub account_type: AccountType,
    pub balance: Decimal,
    /// Annual interest rate in percent.
    pub interest_rate: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_deposit: Option<RecurringDepositPlan>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn is_savings(&self) -> bool {
        self.account_type == AccountType::Savings
    }
}

/// Input model for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub owner_id: String,
    pub bank_name: String,
    pub account_type: AccountType,
    pub initial_deposit: Decimal,
    /// Annual interest rate in percent; defaults when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
}

impl NewAccount {
    /// Validates the new account data
    pub fn validate(&self) -> Result<()> {
        if self.owner_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "ownerId".to_string(),
            )));
        }
        if self.bank_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Bank name cannot be empty".to_string(),
            )));
        }
        if self.initial_deposit < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Initial deposit cannot be negative".to_string(),
            )));
        }
        Ok(())
    }

    pub fn interest_rate_or_default(&self) -> Decimal {
        self.interest_rate.unwrap_or(DEFAULT_SAVINGS_INTEREST_RATE)
    }
}
