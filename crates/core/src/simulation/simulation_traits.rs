use async_trait::async_trait;

use super::session_model::SimulationSession;
use super::simulation_model::{
    AdvanceOutcome, NewSimulationSnapshot, SessionStatus, SimulationSnapshot,
};
use crate::errors::Result;

/// Trait defining the contract for snapshot storage.
#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    async fn append(&self, snapshots: Vec<NewSimulationSnapshot>)
        -> Result<Vec<SimulationSnapshot>>;
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<SimulationSnapshot>>;
    async fn delete_by_owner(&self, owner_id: &str) -> Result<usize>;
}

/// Trait defining the contract for session storage. The store keeps at most
/// one session record per owner.
#[async_trait]
pub trait SessionRepositoryTrait: Send + Sync {
    fn find_active(&self, owner_id: &str) -> Result<Option<SimulationSession>>;
    /// Replaces the owner's session record.
    async fn upsert(&self, session: SimulationSession) -> Result<SimulationSession>;
    async fn save(&self, session: &SimulationSession) -> Result<()>;
}

/// Trait defining the contract for advancing the simulation.
#[async_trait]
pub trait SimulationServiceTrait: Send + Sync {
    /// Advances the owner's virtual calendar by `days` (at least 1),
    /// applying every financial rule that falls in the interval.
    async fn advance(&self, owner_id: &str, days: u32) -> Result<AdvanceOutcome>;
}

/// Trait defining the contract for the session sandbox.
#[async_trait]
pub trait SessionServiceTrait: Send + Sync {
    async fn start_session(&self, owner_id: &str) -> Result<String>;
    async fn end_session(&self, owner_id: &str) -> Result<String>;
    fn session_status(&self, owner_id: &str) -> Result<SessionStatus>;
}
