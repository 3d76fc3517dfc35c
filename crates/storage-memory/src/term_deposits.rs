//! Term deposit repository over the in-memory store.

use async_trait::async_trait;

use finsim_core::errors::{Error, Result};
use finsim_core::term_deposits::{TermDeposit, TermDepositRepositoryTrait};

use crate::store::MemoryStore;

#[async_trait]
impl TermDepositRepositoryTrait for MemoryStore {
    async fn create(&self, deposit: TermDeposit) -> Result<TermDeposit> {
        self.term_deposits.insert(deposit.id.clone(), deposit.clone());
        Ok(deposit)
    }

    fn get_by_id(&self, owner_id: &str, deposit_id: &str) -> Result<TermDeposit> {
        self.term_deposits
            .get(deposit_id)
            .filter(|d| d.owner_id == owner_id)
            .map(|d| d.clone())
            .ok_or_else(|| Error::NotFound(format!("Term deposit {deposit_id} not found")))
    }

    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<TermDeposit>> {
        let mut deposits: Vec<TermDeposit> = self
            .term_deposits
            .iter()
            .filter(|d| d.owner_id == owner_id)
            .map(|d| d.clone())
            .collect();
        deposits.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)));
        Ok(deposits)
    }

    fn list_active_by_owner(&self, owner_id: &str) -> Result<Vec<TermDeposit>> {
        Ok(self
            .list_by_owner(owner_id)?
            .into_iter()
            .filter(|d| d.is_active())
            .collect())
    }

    async fn save(&self, deposit: &TermDeposit) -> Result<()> {
        self.term_deposits.insert(deposit.id.clone(), deposit.clone());
        Ok(())
    }

    async fn save_all(&self, deposits: &[TermDeposit]) -> Result<()> {
        for deposit in deposits {
            self.term_deposits.insert(deposit.id.clone(), deposit.clone());
        }
        Ok(())
    }
}
