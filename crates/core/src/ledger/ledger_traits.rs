//! Ledger collaborator contract.

use async_trait::async_trait;

use super::ledger_model::{NewTransaction, Transaction};
use crate::errors::Result;

/// Trait defining the contract for the append-only transaction store.
///
/// The engine only ever appends in batches and, during a sandbox rollback,
/// deletes by identifier.
#[async_trait]
pub trait LedgerRepositoryTrait: Send + Sync {
    /// Appends a batch of entries and returns them with assigned identifiers.
    async fn append(&self, new_transactions: Vec<NewTransaction>) -> Result<Vec<Transaction>>;

    /// Deletes entries by identifier, returning how many were removed.
    async fn delete_by_ids(&self, transaction_ids: &[String]) -> Result<usize>;

    /// Lists an owner's entries, most recent simulated date first.
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Transaction>>;

    /// Lists the entries that originated from one account.
    fn list_by_account(&self, owner_id: &str, account_id: &str) -> Result<Vec<Transaction>>;
}
