//! Snapshot and session repositories over the in-memory store.

use async_trait::async_trait;

use finsim_core::errors::Result;
use finsim_core::simulation::{
    NewSimulationSnapshot, SessionRepositoryTrait, SimulationSession, SimulationSnapshot,
    SnapshotRepositoryTrait,
};

use crate::store::MemoryStore;

#[async_trait]
impl SnapshotRepositoryTrait for MemoryStore {
    async fn append(
        &self,
        snapshots: Vec<NewSimulationSnapshot>,
    ) -> Result<Vec<SimulationSnapshot>> {
        let mut created = Vec::with_capacity(snapshots.len());
        for new in snapshots {
            let snapshot: SimulationSnapshot = new.into();
            self.snapshots.insert(snapshot.id.clone(), snapshot.clone());
            created.push(snapshot);
        }
        Ok(created)
    }

    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<SimulationSnapshot>> {
        let mut snapshots: Vec<SimulationSnapshot> = self
            .snapshots
            .iter()
            .filter(|s| s.owner_id == owner_id)
            .map(|s| s.clone())
            .collect();
        snapshots.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(snapshots)
    }

    async fn delete_by_owner(&self, owner_id: &str) -> Result<usize> {
        let ids: Vec<String> = self
            .snapshots
            .iter()
            .filter(|s| s.owner_id == owner_id)
            .map(|s| s.id.clone())
            .collect();
        for id in &ids {
            self.snapshots.remove(id);
        }
        Ok(ids.len())
    }
}

#[async_trait]
impl SessionRepositoryTrait for MemoryStore {
    fn find_active(&self, owner_id: &str) -> Result<Option<SimulationSession>> {
        Ok(self
            .sessions
            .get(owner_id)
            .filter(|s| s.active)
            .map(|s| s.clone()))
    }

    async fn upsert(&self, session: SimulationSession) -> Result<SimulationSession> {
        self.sessions
            .insert(session.owner_id.clone(), session.clone());
        Ok(session)
    }

    async fn save(&self, session: &SimulationSession) -> Result<()> {
        self.sessions
            .insert(session.owner_id.clone(), session.clone());
        Ok(())
    }
}
