//! Loan repository over the in-memory store.

use async_trait::async_trait;

use finsim_core::errors::{Error, Result};
use finsim_core::loans::{Loan, LoanRepositoryTrait};

use crate::store::MemoryStore;

#[async_trait]
impl LoanRepositoryTrait for MemoryStore {
    async fn create(&self, loan: Loan) -> Result<Loan> {
        self.loans.insert(loan.id.clone(), loan.clone());
        Ok(loan)
    }

    fn get_by_id(&self, owner_id: &str, loan_id: &str) -> Result<Loan> {
        self.loans
            .get(loan_id)
            .filter(|l| l.owner_id == owner_id)
            .map(|l| l.clone())
            .ok_or_else(|| Error::NotFound(format!("Loan {loan_id} not found")))
    }

    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Loan>> {
        let mut loans: Vec<Loan> = self
            .loans
            .iter()
            .filter(|l| l.owner_id == owner_id)
            .map(|l| l.clone())
            .collect();
        loans.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)));
        Ok(loans)
    }

    fn list_active_by_owner(&self, owner_id: &str) -> Result<Vec<Loan>> {
        Ok(self
            .list_by_owner(owner_id)?
            .into_iter()
            .filter(|l| l.is_active())
            .collect())
    }

    async fn save(&self, loan: &Loan) -> Result<()> {
        self.loans.insert(loan.id.clone(), loan.clone());
        Ok(())
    }

    async fn save_all(&self, loans: &[Loan]) -> Result<()> {
        for loan in loans {
            self.loans.insert(loan.id.clone(), loan.clone());
        }
        Ok(())
    }
}
