//! Loans module - origination, the fixed rate table, and the EMI
//! amortization engine.

mod amortization_calculator;
mod loans_model;
mod loans_service;
mod loans_traits;

pub use amortization_calculator::{emi_amount, months_between, process_due_loans};
pub use loans_model::{Loan, LoanStatus, LoanType, NewLoan};
pub use loans_service::LoanService;
pub use loans_traits::{LoanRepositoryTrait, LoanServiceTrait};

#[cfg(test)]
mod amortization_calculator_tests;
