//! Ledger module - the append-only transaction trail.

mod ledger_model;
mod ledger_traits;

pub use ledger_model::{NewTransaction, Transaction, TransactionType};
pub use ledger_traits::LedgerRepositoryTrait;

#[cfg(test)]
mod ledger_model_tests;
