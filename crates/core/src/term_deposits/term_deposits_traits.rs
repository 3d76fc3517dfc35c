use async_trait::async_trait;

use super::term_deposits_model::{NewTermDeposit, TermDeposit};
use crate::errors::Result;

/// Trait defining the contract for term deposit storage.
#[async_trait]
pub trait TermDepositRepositoryTrait: Send + Sync {
    async fn create(&self, deposit: TermDeposit) -> Result<TermDeposit>;
    fn get_by_id(&self, owner_id: &str, deposit_id: &str) -> Result<TermDeposit>;
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<TermDeposit>>;
    fn list_active_by_owner(&self, owner_id: &str) -> Result<Vec<TermDeposit>>;
    async fn save(&self, deposit: &TermDeposit) -> Result<()>;
    async fn save_all(&self, deposits: &[TermDeposit]) -> Result<()>;
}

/// Trait defining the contract for term deposit operations.
#[async_trait]
pub trait TermDepositServiceTrait: Send + Sync {
    async fn create_term_deposit(&self, new_deposit: NewTermDeposit) -> Result<TermDeposit>;
    fn list_term_deposits(&self, owner_id: &str) -> Result<Vec<TermDeposit>>;
}
