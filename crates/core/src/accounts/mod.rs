//! Accounts module - bank accounts, deposits/withdrawals/transfers, and the
//! daily deposit-interest engine.

mod accounts_constants;
mod accounts_model;
mod accounts_service;
mod accounts_traits;
mod interest_calculator;

// Re-export the public interface
pub use accounts_constants::*;
pub use accounts_model::{Account, AccountType, NewAccount, RecurringDepositPlan};
pub use accounts_service::AccountService;
pub use accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
pub use interest_calculator::{accrue_daily_interest, apply_recurring_deposits};

#[cfg(test)]
mod interest_calculator_tests;
