//! Credit cards module - statement generation, overdue interest/late fees,
//! spends, and bill payments.

mod billing_calculator;
mod credit_cards_constants;
mod credit_cards_model;
mod credit_cards_service;
mod credit_cards_traits;

pub use billing_calculator::{apply_overdue_charges, generate_statement, overdue_charges_due};
pub use credit_cards_constants::*;
pub use credit_cards_model::{CreditCard, CreditCardStatus, NewCreditCard};
pub use credit_cards_service::CreditCardService;
pub use credit_cards_traits::{CreditCardRepositoryTrait, CreditCardServiceTrait};
