use async_trait::async_trait;

use super::loans_model::{Loan, NewLoan};
use crate::errors::Result;

/// Trait defining the contract for loan storage.
#[async_trait]
pub trait LoanRepositoryTrait: Send + Sync {
    async fn create(&self, loan: Loan) -> Result<Loan>;
    fn get_by_id(&self, owner_id: &str, loan_id: &str) -> Result<Loan>;
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Loan>>;
    fn list_active_by_owner(&self, owner_id: &str) -> Result<Vec<Loan>>;
    async fn save(&self, loan: &Loan) -> Result<()>;
    async fn save_all(&self, loans: &[Loan]) -> Result<()>;
}

/// Trait defining the contract for loan operations.
#[async_trait]
pub trait LoanServiceTrait: Send + Sync {
    async fn apply_loan(&self, new_loan: NewLoan) -> Result<Loan>;
    fn list_loans(&self, owner_id: &str) -> Result<Vec<Loan>>;
}
