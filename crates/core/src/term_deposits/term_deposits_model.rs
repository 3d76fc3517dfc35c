//! Term deposit domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Declared compounding schedule. Stored for completeness; the maturity
/// payout deliberately uses simple annual compounding regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Monthly,
    Quarterly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TermDepositStatus {
    Active,
    Matured,
    Broken,
}

/// Domain model representing a fixed deposit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermDeposit {
    pub id: String,
    pub owner_id: String,
    /// Account the principal came from; the payout returns there.
    pub account_id: String,
    pub principal: Decimal,
    /// Annual interest rate in percent, from the tenure slab.
    pub interest_rate: Decimal,
    pub start_date: NaiveDate,
    pub maturity_date: NaiveDate,
    pub compounding_frequency: CompoundingFrequency,
    pub status: TermDepositStatus,
    pub accumulated_interest: Decimal,
}

impl TermDeposit {
    pub fn is_active(&self) -> bool {
        self.status == TermDepositStatus::Active
    }
}

/// Input model for opening a fixed deposit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTermDeposit {
    pub owner_id: String,
    pub account_id: String,
    pub amount: Decimal,
    pub tenure_years: u32,
}

impl NewTermDeposit {
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Amount must be positive".to_string(),
            )));
        }
        if self.tenure_years == 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Tenure must be at least one year".to_string(),
            )));
        }
        Ok(())
    }
}
