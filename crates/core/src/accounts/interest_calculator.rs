//! Deposit interest engine.
//!
//! Pure day-step functions invoked by the simulation clock: daily savings
//! compounding and monthly recurring deposits.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::accounts_model::Account;
use crate::constants::{DAYS_PER_YEAR, PERCENT};
use crate::ledger::{NewTransaction, TransactionType};

/// Adds one day of interest to every savings account.
///
/// Simple daily approximation of continuous compounding:
/// `balance * (annualRate / 100) / 365`. Deliberately emits no ledger entry;
/// interest shows up only in the balance.
pub fn accrue_daily_interest(accounts: &mut [Account]) {
    for account in accounts.iter_mut() {
        if !account.is_savings() {
            continue;
        }
        let daily_rate = account.interest_rate / PERCENT / DAYS_PER_YEAR;
        account.balance += account.balance * daily_rate;
    }
}

/// Credits active recurring-deposit plans whose day-of-month matches `today`.
///
/// Returns the DEPOSIT entries to append for the credits made.
pub fn apply_recurring_deposits(accounts: &mut [Account], today: NaiveDate) -> Vec<NewTransaction> {
    let mut transactions = Vec::new();
    for account in accounts.iter_mut() {
        let Some(plan) = &account.recurring_deposit else {
            continue;
        };
        if !plan.active || plan.amount <= Decimal::ZERO || plan.day_of_month != today.day() {
            continue;
        }
        let amount = plan.amount;
        account.balance += amount;
        transactions.push(NewTransaction::new(
            &account.owner_id,
            &account.id,
            TransactionType::Deposit,
            amount,
            "Monthly deposit",
            today,
        ));
    }
    transactions
}
