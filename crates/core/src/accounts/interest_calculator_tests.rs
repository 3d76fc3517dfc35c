//! Unit tests for the deposit interest engine.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::accounts_model::{Account, AccountType, RecurringDepositPlan};
use super::interest_calculator::{accrue_daily_interest, apply_recurring_deposits};
use crate::ledger::TransactionType;

fn savings_account(balance: Decimal, interest_rate: Decimal) -> Account {
    Account {
        id: "acc-1".to_string(),
        owner_id: "owner-1".to_string(),
        bank_name: "Test Bank".to_string(),
        account_number: "1000000001".to_string(),
        account_type: AccountType::Savings,
        balance,
        interest_rate,
        recurring_deposit: None,
        created_at: Utc::now(),
    }
}

#[test]
fn daily_interest_compounds_savings_balance() {
    // 3.65% annual is exactly 0.01% per day under the 365-day convention.
    let mut accounts = vec![savings_account(dec!(1000), dec!(3.65))];
    accrue_daily_interest(&mut accounts);
    assert_eq!(accounts[0].balance, dec!(1000.1));
}

#[test]
fn current_accounts_do_not_accrue_interest() {
    let mut account = savings_account(dec!(1000), dec!(3.65));
    account.account_type = AccountType::Current;
    let mut accounts = vec![account];
    accrue_daily_interest(&mut accounts);
    assert_eq!(accounts[0].balance, dec!(1000));
}

#[test]
fn recurring_deposit_credits_on_matching_day() {
    let mut account = savings_account(dec!(500), dec!(3.5));
    account.recurring_deposit = Some(RecurringDepositPlan {
        amount: dec!(2000),
        day_of_month: 5,
        active: true,
    });
    let mut accounts = vec![account];

    let off_day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    assert!(apply_recurring_deposits(&mut accounts, off_day).is_empty());
    assert_eq!(accounts[0].balance, dec!(500));

    let on_day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let transactions = apply_recurring_deposits(&mut accounts, on_day);
    assert_eq!(accounts[0].balance, dec!(2500));
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].transaction_type, TransactionType::Deposit);
    assert_eq!(transactions[0].amount, dec!(2000));
    assert_eq!(transactions[0].date, on_day);
}

#[test]
fn inactive_plan_is_skipped() {
    let mut account = savings_account(dec!(500), dec!(3.5));
    account.recurring_deposit = Some(RecurringDepositPlan {
        amount: dec!(2000),
        day_of_month: 5,
        active: false,
    });
    let mut accounts = vec![account];

    let on_day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    assert!(apply_recurring_deposits(&mut accounts, on_day).is_empty());
    assert_eq!(accounts[0].balance, dec!(500));
}
