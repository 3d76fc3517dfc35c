//! Position repository over the in-memory store.

use async_trait::async_trait;

use finsim_core::errors::Result;
use finsim_core::portfolio::{Position, PositionRepositoryTrait};

use crate::store::MemoryStore;

#[async_trait]
impl PositionRepositoryTrait for MemoryStore {
    fn find(&self, owner_id: &str, stock_id: &str) -> Result<Option<Position>> {
        Ok(self
            .positions
            .iter()
            .find(|p| p.owner_id == owner_id && p.stock_id == stock_id)
            .map(|p| p.clone()))
    }

    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Position>> {
        let mut positions: Vec<Position> = self
            .positions
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .map(|p| p.clone())
            .collect();
        positions.sort_by(|a, b| a.stock_id.cmp(&b.stock_id));
        Ok(positions)
    }

    async fn upsert(&self, position: &Position) -> Result<()> {
        self.positions.insert(position.id.clone(), position.clone());
        Ok(())
    }

    async fn delete(&self, position_id: &str) -> Result<()> {
        self.positions.remove(position_id);
        Ok(())
    }
}
