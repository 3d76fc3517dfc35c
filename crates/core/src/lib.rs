//! Finsim Core - Domain entities, financial engines, and traits.
//!
//! This crate contains the simulation engine for a sandboxed personal
//! finance environment: bank accounts, stocks, loans, term deposits and
//! credit cards advanced over a virtual calendar one day at a time, with a
//! reversible session sandbox on top. It is storage-agnostic and defines
//! repository traits that are implemented by the `storage-memory` crate.

pub mod accounts;
pub mod constants;
pub mod credit_cards;
pub mod errors;
pub mod ledger;
pub mod loans;
pub mod market;
pub mod net_worth;
pub mod portfolio;
pub mod profiles;
pub mod simulation;
pub mod term_deposits;

// Re-export the simulation surface exposed to callers
pub use simulation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
