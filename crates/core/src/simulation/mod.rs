//! Simulation module - the day-stepping clock and the session sandbox.
//!
//! `SimulationService` advances an owner's virtual calendar N days in one
//! call, composing the per-instrument engines in a fixed order and
//! persisting once at the end. `SessionService` wraps runs in a reversible
//! sandbox: a by-value baseline captured at session start, restored verbatim
//! at session end together with a purge of every transaction the session
//! created.

mod session_model;
mod session_service;
mod simulation_model;
mod simulation_service;
mod simulation_traits;

pub use session_model::{
    AccountBaseline, CreditCardBaseline, LoanBaseline, ProfileBaseline, SessionBaseline,
    SimulationSession, StockBaseline, TermDepositBaseline,
};
pub use session_service::{record_session_transactions, SessionService};
pub use simulation_model::{
    AdvanceOutcome, NewSimulationSnapshot, SessionStatus, SimulationSnapshot,
};
pub use simulation_service::SimulationService;
pub use simulation_traits::{
    SessionRepositoryTrait, SessionServiceTrait, SimulationServiceTrait, SnapshotRepositoryTrait,
};
