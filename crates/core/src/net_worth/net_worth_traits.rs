use super::net_worth_model::NetWorthBreakdown;
use crate::errors::Result;

/// Trait defining the contract for net worth computation.
pub trait NetWorthServiceTrait: Send + Sync {
    /// Computes the owner's current net worth from stored entity state.
    fn compute_for_owner(&self, owner_id: &str) -> Result<NetWorthBreakdown>;
}
