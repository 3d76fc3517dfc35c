//! Account repository over the in-memory store.

use async_trait::async_trait;

use finsim_core::accounts::{Account, AccountRepositoryTrait};
use finsim_core::errors::{Error, Result};

use crate::store::MemoryStore;

#[async_trait]
impl AccountRepositoryTrait for MemoryStore {
    async fn create(&self, account: Account) -> Result<Account> {
        self.accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }

    fn get_by_id(&self, owner_id: &str, account_id: &str) -> Result<Account> {
        self.accounts
            .get(account_id)
            .filter(|a| a.owner_id == owner_id)
            .map(|a| a.clone())
            .ok_or_else(|| Error::NotFound(format!("Account {account_id} not found")))
    }

    fn get_by_number(&self, account_number: &str) -> Result<Account> {
        self.accounts
            .iter()
            .find(|a| a.account_number == account_number)
            .map(|a| a.clone())
            .ok_or_else(|| Error::NotFound(format!("Account number {account_number} not found")))
    }

    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Account>> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .filter(|a| a.owner_id == owner_id)
            .map(|a| a.clone())
            .collect();
        // Creation order first: the engine treats the first-listed account
        // as the owner's primary.
        accounts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(accounts)
    }

    async fn save(&self, account: &Account) -> Result<()> {
        self.accounts.insert(account.id.clone(), account.clone());
        Ok(())
    }

    async fn save_all(&self, accounts: &[Account]) -> Result<()> {
        for account in accounts {
            self.accounts.insert(account.id.clone(), account.clone());
        }
        Ok(())
    }
}
