use async_trait::async_trait;
use rust_decimal::Decimal;

use super::accounts_model::{Account, NewAccount, RecurringDepositPlan};
use crate::errors::Result;

/// Trait defining the contract for account storage.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    async fn create(&self, account: Account) -> Result<Account>;
    fn get_by_id(&self, owner_id: &str, account_id: &str) -> Result<Account>;
    /// Cross-owner lookup used by transfers, which address the destination
    /// by account number.
    fn get_by_number(&self, account_number: &str) -> Result<Account>;
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Account>>;
    async fn save(&self, account: &Account) -> Result<()>;
    async fn save_all(&self, accounts: &[Account]) -> Result<()>;
}

/// Trait defining the contract for account operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;
    fn get_account(&self, owner_id: &str, account_id: &str) -> Result<Account>;
    fn list_accounts(&self, owner_id: &str) -> Result<Vec<Account>>;
    async fn deposit(&self, owner_id: &str, account_id: &str, amount: Decimal) -> Result<Account>;
    async fn withdraw(&self, owner_id: &str, account_id: &str, amount: Decimal)
        -> Result<Account>;
    async fn transfer(
        &self,
        owner_id: &str,
        from_account_id: &str,
        to_account_number: &str,
        amount: Decimal,
    ) -> Result<()>;
    async fn set_recurring_deposit(
        &self,
        owner_id: &str,
        account_id: &str,
        plan: Option<RecurringDepositPlan>,
    ) -> Result<Account>;
}
