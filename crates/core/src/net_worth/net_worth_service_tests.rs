//! Unit tests for net worth aggregation.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::net_worth_service::breakdown_from_entities;
use crate::accounts::{Account, AccountType};
use crate::credit_cards::{CreditCard, CreditCardStatus};
use crate::loans::{Loan, LoanStatus, LoanType};
use crate::market::{Stock, TrendKind};
use crate::portfolio::Position;
use crate::term_deposits::{CompoundingFrequency, TermDeposit, TermDepositStatus};

fn account(balance: Decimal) -> Account {
    Account {
        id: "acc-1".to_string(),
        owner_id: "owner-1".to_string(),
        bank_name: "Test Bank".to_string(),
        account_number: "1000000001".to_string(),
        account_type: AccountType::Savings,
        balance,
        interest_rate: dec!(3.5),
        recurring_deposit: None,
        created_at: Utc::now(),
    }
}

fn stock(id: &str, price: Decimal) -> Stock {
    Stock {
        id: id.to_string(),
        owner_id: "owner-1".to_string(),
        symbol: format!("SYM{id}"),
        name: "Stock".to_string(),
        sector: "Sector".to_string(),
        current_price: price,
        volatility: 0.01,
        growth_bias: 0.0,
        trend: TrendKind::Neutral,
        last_updated: Utc::now(),
        history: Vec::new(),
        simulated_history: Vec::new(),
    }
}

fn loan(remaining: Decimal, status: LoanStatus) -> Loan {
    Loan {
        id: "loan-1".to_string(),
        owner_id: "owner-1".to_string(),
        loan_type: LoanType::Personal,
        principal: dec!(12000),
        interest_rate: dec!(12),
        tenure_months: 12,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        remaining_balance: remaining,
        emi_amount: dec!(1066.19),
        status,
        total_interest_paid: Decimal::ZERO,
    }
}

fn term_deposit(principal: Decimal, status: TermDepositStatus) -> TermDeposit {
    TermDeposit {
        id: "fd-1".to_string(),
        owner_id: "owner-1".to_string(),
        account_id: "acc-1".to_string(),
        principal,
        interest_rate: dec!(6.5),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        maturity_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        compounding_frequency: CompoundingFrequency::Quarterly,
        status,
        accumulated_interest: Decimal::ZERO,
    }
}

fn credit_card(outstanding: Decimal, status: CreditCardStatus) -> CreditCard {
    CreditCard {
        id: "card-1".to_string(),
        owner_id: "owner-1".to_string(),
        card_name: "Platinum Rewards".to_string(),
        card_number: "4000111122223333".to_string(),
        credit_limit: dec!(50000),
        outstanding_balance: outstanding,
        available_credit: dec!(50000) - outstanding,
        interest_rate: dec!(36),
        billing_day: 1,
        due_day_offset: 20,
        minimum_due_percent: dec!(0.05),
        statement_balance: Decimal::ZERO,
        minimum_due: Decimal::ZERO,
        total_interest_paid: Decimal::ZERO,
        missed_payments_count: 0,
        last_statement_date: None,
        next_due_date: None,
        last_interest_applied_date: None,
        status,
        created_at: Utc::now(),
    }
}

#[test]
fn assets_minus_liabilities() {
    let accounts = vec![account(dec!(10000))];
    let stocks = vec![stock("s1", dec!(100))];
    let positions = vec![Position::open("owner-1", "s1", dec!(5), dec!(90))];
    let loans = vec![loan(dec!(4000), LoanStatus::Active)];
    let fds = vec![term_deposit(dec!(2000), TermDepositStatus::Active)];
    let cards = vec![credit_card(dec!(1500), CreditCardStatus::Active)];

    let breakdown = breakdown_from_entities(&accounts, &stocks, &positions, &loans, &fds, &cards);

    assert_eq!(breakdown.total_bank_balance, dec!(10000));
    assert_eq!(breakdown.total_stock_value, dec!(500));
    assert_eq!(breakdown.total_fd_value, dec!(2000));
    assert_eq!(breakdown.total_loan_liability, dec!(4000));
    assert_eq!(breakdown.total_credit_card_liability, dec!(1500));
    assert_eq!(breakdown.net_worth, dec!(7000));
}

#[test]
fn negative_balances_are_floored_only_here() {
    let accounts = vec![account(dec!(-2500))];
    let breakdown = breakdown_from_entities(&accounts, &[], &[], &[], &[], &[]);
    assert_eq!(breakdown.total_bank_balance, Decimal::ZERO);
    assert_eq!(breakdown.net_worth, Decimal::ZERO);
    // The account itself keeps its negative balance.
    assert_eq!(accounts[0].balance, dec!(-2500));
}

#[test]
fn terminal_status_entities_are_excluded() {
    let accounts = vec![account(dec!(1000))];
    let loans = vec![loan(dec!(4000), LoanStatus::Closed)];
    let fds = vec![term_deposit(dec!(2000), TermDepositStatus::Matured)];
    let cards = vec![credit_card(dec!(1500), CreditCardStatus::Blocked)];

    let breakdown = breakdown_from_entities(&accounts, &[], &[], &loans, &fds, &cards);
    assert_eq!(breakdown.net_worth, dec!(1000));
}

#[test]
fn unheld_stocks_contribute_nothing() {
    let stocks = vec![stock("s1", dec!(100)), stock("s2", dec!(50))];
    let positions = vec![Position::open("owner-1", "s2", dec!(2), dec!(40))];
    let breakdown = breakdown_from_entities(&[], &stocks, &positions, &[], &[], &[]);
    assert_eq!(breakdown.total_stock_value, dec!(100));
}
