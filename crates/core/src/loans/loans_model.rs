//! Loan domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Loan product, each carrying a fixed annual rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanType {
    Personal,
    Home,
    Education,
}

impl LoanType {
    /// Annual interest rate (%) fixed at origination for this product.
    pub fn annual_rate(&self) -> Decimal {
        match self {
            LoanType::Personal => dec!(12),
            LoanType::Home => dec!(8),
            LoanType::Education => dec!(10),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::Personal => "PERSONAL",
            LoanType::Home => "HOME",
            LoanType::Education => "EDUCATION",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    Active,
    Closed,
    Defaulted,
}

/// Domain model representing a loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    pub owner_id: String,
    pub loan_type: LoanType,
    pub principal: Decimal,
    /// Annual interest rate in percent.
    pub interest_rate: Decimal,
    pub tenure_months: u32,
    /// EMIs fall due on this date's day-of-month.
    pub start_date: NaiveDate,
    pub remaining_balance: Decimal,
    /// Fixed at origination by the amortization formula.
    pub emi_amount: Decimal,
    pub status: LoanStatus,
    pub total_interest_paid: Decimal,
}

impl Loan {
    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }
}

/// Input model for a loan application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoan {
    pub owner_id: String,
    pub loan_type: LoanType,
    pub amount: Decimal,
    pub tenure_months: u32,
    /// Account the principal is disbursed to.
    pub account_id: String,
}

impl NewLoan {
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Amount must be positive".to_string(),
            )));
        }
        if self.tenure_months == 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Tenure must be at least one month".to_string(),
            )));
        }
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        Ok(())
    }
}
