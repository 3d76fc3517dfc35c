use async_trait::async_trait;

use super::profiles_model::OwnerProfile;
use crate::errors::Result;

/// Trait defining the contract for owner profile storage.
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    fn get_by_owner(&self, owner_id: &str) -> Result<OwnerProfile>;
    async fn save(&self, profile: &OwnerProfile) -> Result<()>;
}
