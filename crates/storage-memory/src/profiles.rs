//! Profile repository over the in-memory store.

use async_trait::async_trait;

use finsim_core::errors::{Error, Result};
use finsim_core::profiles::{OwnerProfile, ProfileRepositoryTrait};

use crate::store::MemoryStore;

#[async_trait]
impl ProfileRepositoryTrait for MemoryStore {
    fn get_by_owner(&self, owner_id: &str) -> Result<OwnerProfile> {
        self.profiles
            .get(owner_id)
            .map(|p| p.clone())
            .ok_or_else(|| Error::NotFound(format!("Profile for owner {owner_id} not found")))
    }

    async fn save(&self, profile: &OwnerProfile) -> Result<()> {
        self.profiles
            .insert(profile.owner_id.clone(), profile.clone());
        Ok(())
    }
}
