//! Sandbox session models.
//!
//! The baseline is a typed, by-value copy of every mutable financial field
//! the sandbox can restore. Capturing values (never references) at session
//! start guarantees no aliasing between live and baseline data.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::Account;
use crate::credit_cards::CreditCard;
use crate::loans::{Loan, LoanStatus};
use crate::market::Stock;
use crate::profiles::OwnerProfile;
use crate::term_deposits::{TermDeposit, TermDepositStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBaseline {
    pub simulation_date: NaiveDate,
    pub virtual_net_worth: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBaseline {
    pub account_id: String,
    pub balance: Decimal,
}

impl AccountBaseline {
    pub fn capture(account: &Account) -> Self {
        Self {
            account_id: account.id.clone(),
            balance: account.balance,
        }
    }

    pub fn restore(&self, account: &mut Account) {
        account.balance = self.balance;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockBaseline {
    pub stock_id: String,
    pub current_price: Decimal,
}

impl StockBaseline {
    pub fn capture(stock: &Stock) -> Self {
        Self {
            stock_id: stock.id.clone(),
            current_price: stock.current_price,
        }
    }

    /// Restores the price and drops the simulated history accumulated
    /// during the session.
    pub fn restore(&self, stock: &mut Stock) {
        stock.current_price = self.current_price;
        stock.simulated_history.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanBaseline {
    pub loan_id: String,
    pub remaining_balance: Decimal,
    pub status: LoanStatus,
}

impl LoanBaseline {
    pub fn capture(loan: &Loan) -> Self {
        Self {
            loan_id: loan.id.clone(),
            remaining_balance: loan.remaining_balance,
            status: loan.status,
        }
    }

    pub fn restore(&self, loan: &mut Loan) {
        loan.remaining_balance = self.remaining_balance;
        loan.status = self.status;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermDepositBaseline {
    pub term_deposit_id: String,
    pub status: TermDepositStatus,
}

impl TermDepositBaseline {
    pub fn capture(deposit: &TermDeposit) -> Self {
        Self {
            term_deposit_id: deposit.id.clone(),
            status: deposit.status,
        }
    }

    pub fn restore(&self, deposit: &mut TermDeposit) {
        deposit.status = self.status;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardBaseline {
    pub card_id: String,
    pub outstanding_balance: Decimal,
    pub available_credit: Decimal,
    pub statement_balance: Decimal,
    pub minimum_due: Decimal,
    pub total_interest_paid: Decimal,
    pub missed_payments_count: u32,
    pub last_statement_date: Option<NaiveDate>,
    pub next_due_date: Option<NaiveDate>,
    pub last_interest_applied_date: Option<NaiveDate>,
}

impl CreditCardBaseline {
    pub fn capture(card: &CreditCard) -> Self {
        Self {
            card_id: card.id.clone(),
            outstanding_balance: card.outstanding_balance,
            available_credit: card.available_credit,
            statement_balance: card.statement_balance,
            minimum_due: card.minimum_due,
            total_interest_paid: card.total_interest_paid,
            missed_payments_count: card.missed_payments_count,
            last_statement_date: card.last_statement_date,
            next_due_date: card.next_due_date,
            last_interest_applied_date: card.last_interest_applied_date,
        }
    }

    pub fn restore(&self, card: &mut CreditCard) {
        card.outstanding_balance = self.outstanding_balance;
        card.available_credit = self.available_credit;
        card.statement_balance = self.statement_balance;
        card.minimum_due = self.minimum_due;
        card.total_interest_paid = self.total_interest_paid;
        card.missed_payments_count = self.missed_payments_count;
        card.last_statement_date = self.last_statement_date;
        card.next_due_date = self.next_due_date;
        card.last_interest_applied_date = self.last_interest_applied_date;
    }
}

/// Deep-value snapshot of everything the sandbox can roll back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionBaseline {
    pub profile: ProfileBaseline,
    pub accounts: Vec<AccountBaseline>,
    pub stocks: Vec<StockBaseline>,
    pub loans: Vec<LoanBaseline>,
    pub term_deposits: Vec<TermDepositBaseline>,
    pub credit_cards: Vec<CreditCardBaseline>,
}

impl SessionBaseline {
    pub fn capture(
        profile: &OwnerProfile,
        accounts: &[Account],
        stocks: &[Stock],
        loans: &[Loan],
        term_deposits: &[TermDeposit],
        credit_cards: &[CreditCard],
    ) -> Self {
        Self {
            profile: ProfileBaseline {
                simulation_date: profile.simulation_date,
                virtual_net_worth: profile.virtual_net_worth,
            },
            accounts: accounts.iter().map(AccountBaseline::capture).collect(),
            stocks: stocks.iter().map(StockBaseline::capture).collect(),
            loans: loans.iter().map(LoanBaseline::capture).collect(),
            term_deposits: term_deposits
                .iter()
                .map(TermDepositBaseline::capture)
                .collect(),
            credit_cards: credit_cards
                .iter()
                .map(CreditCardBaseline::capture)
                .collect(),
        }
    }
}

/// A sandbox session. One active session per owner, enforced by the session
/// store's owner-keyed uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSession {
    pub id: String,
    pub owner_id: String,
    pub active: bool,
    pub started_at: DateTime<Utc>,
    pub baseline: SessionBaseline,
    /// Identifiers of every ledger entry created while this session was
    /// active, purged on rollback.
    pub transactions_created: Vec<String>,
}

impl SimulationSession {
    pub fn start(owner_id: impl Into<String>, baseline: SessionBaseline) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: owner_id.into(),
            active: true,
            started_at: Utc::now(),
            baseline,
            transactions_created: Vec::new(),
        }
    }
}
