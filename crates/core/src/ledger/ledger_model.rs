//! Transaction domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of ledger entry. Stored in SCREAMING_SNAKE_CASE wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
    Interest,
    Emi,
    Salary,
    Investment,
    LoanDisbursal,
    FdCreation,
    FdMaturity,
    Expense,
    Payment,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Withdrawal => "WITHDRAWAL",
            TransactionType::Transfer => "TRANSFER",
            TransactionType::Interest => "INTEREST",
            TransactionType::Emi => "EMI",
            TransactionType::Salary => "SALARY",
            TransactionType::Investment => "INVESTMENT",
            TransactionType::LoanDisbursal => "LOAN_DISBURSAL",
            TransactionType::FdCreation => "FD_CREATION",
            TransactionType::FdMaturity => "FD_MATURITY",
            TransactionType::Expense => "EXPENSE",
            TransactionType::Payment => "PAYMENT",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable ledger record.
///
/// `date` is the simulated calendar date the entry belongs to;
/// `recorded_at` is the real wall-clock audit timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub owner_id: String,
    /// Originating account. For card charges this references the card itself.
    pub account_id: String,
    pub transaction_type: TransactionType,
    /// Signed amount: credits positive, debits negative.
    pub amount: Decimal,
    pub description: String,
    /// Counterparty account for transfers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_account_id: Option<String>,
    pub date: NaiveDate,
    pub recorded_at: DateTime<Utc>,
}

/// Input model for appending a ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub owner_id: String,
    pub account_id: String,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub description: String,
    pub related_account_id: Option<String>,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn new(
        owner_id: impl Into<String>,
        account_id: impl Into<String>,
        transaction_type: TransactionType,
        amount: Decimal,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            account_id: account_id.into(),
            transaction_type,
            amount,
            description: description.into(),
            related_account_id: None,
            date,
        }
    }

    pub fn with_related_account(mut self, related_account_id: impl Into<String>) -> Self {
        self.related_account_id = Some(related_account_id.into());
        self
    }
}

impl From<NewTransaction> for Transaction {
    fn from(new: NewTransaction) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: new.owner_id,
            account_id: new.account_id,
            transaction_type: new.transaction_type,
            amount: new.amount,
            description: new.description,
            related_account_id: new.related_account_id,
            date: new.date,
            recorded_at: Utc::now(),
        }
    }
}
