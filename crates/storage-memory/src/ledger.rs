//! Ledger repository over the in-memory store.

use async_trait::async_trait;

use finsim_core::errors::Result;
use finsim_core::ledger::{LedgerRepositoryTrait, NewTransaction, Transaction};

use crate::store::MemoryStore;

#[async_trait]
impl LedgerRepositoryTrait for MemoryStore {
    async fn append(&self, new_transactions: Vec<NewTransaction>) -> Result<Vec<Transaction>> {
        let mut created = Vec::with_capacity(new_transactions.len());
        for new in new_transactions {
            let transaction: Transaction = new.into();
            self.transactions
                .insert(transaction.id.clone(), transaction.clone());
            created.push(transaction);
        }
        Ok(created)
    }

    async fn delete_by_ids(&self, transaction_ids: &[String]) -> Result<usize> {
        let mut removed = 0;
        for id in transaction_ids {
            if self.transactions.remove(id).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .map(|t| t.clone())
            .collect();
        transactions.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then(b.recorded_at.cmp(&a.recorded_at))
        });
        Ok(transactions)
    }

    fn list_by_account(&self, owner_id: &str, account_id: &str) -> Result<Vec<Transaction>> {
        Ok(self
            .list_by_owner(owner_id)?
            .into_iter()
            .filter(|t| t.account_id == account_id)
            .collect())
    }
}
