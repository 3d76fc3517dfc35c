//! Term deposits module - fixed deposits, slab rates, and the maturity
//! engine.

mod maturity_calculator;
mod term_deposits_constants;
mod term_deposits_model;
mod term_deposits_service;
mod term_deposits_traits;

pub use maturity_calculator::{maturity_payout, process_matured_deposits};
pub use term_deposits_constants::slab_rate;
pub use term_deposits_model::{
    CompoundingFrequency, NewTermDeposit, TermDeposit, TermDepositStatus,
};
pub use term_deposits_service::TermDepositService;
pub use term_deposits_traits::{TermDepositRepositoryTrait, TermDepositServiceTrait};
