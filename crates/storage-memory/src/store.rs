//! The shared in-memory store.

use dashmap::DashMap;

use finsim_core::accounts::Account;
use finsim_core::credit_cards::CreditCard;
use finsim_core::ledger::Transaction;
use finsim_core::loans::Loan;
use finsim_core::market::Stock;
use finsim_core::portfolio::Position;
use finsim_core::profiles::OwnerProfile;
use finsim_core::simulation::{SimulationSession, SimulationSnapshot};
use finsim_core::term_deposits::TermDeposit;

/// Thread-safe in-memory store behind all repository traits.
///
/// Entity maps are keyed by entity id. Profiles and sessions are keyed by
/// owner id, which is what enforces the one-active-session-per-owner
/// uniqueness the sandbox relies on.
#[derive(Default)]
pub struct MemoryStore {
    pub(crate) accounts: DashMap<String, Account>,
    pub(crate) stocks: DashMap<String, Stock>,
    pub(crate) positions: DashMap<String, Position>,
    pub(crate) loans: DashMap<String, Loan>,
    pub(crate) term_deposits: DashMap<String, TermDeposit>,
    pub(crate) credit_cards: DashMap<String, CreditCard>,
    pub(crate) transactions: DashMap<String, Transaction>,
    pub(crate) snapshots: DashMap<String, SimulationSnapshot>,
    pub(crate) sessions: DashMap<String, SimulationSession>,
    pub(crate) profiles: DashMap<String, OwnerProfile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
