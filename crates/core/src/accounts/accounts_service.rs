//! Account service implementation.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rand::Rng;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::accounts_model::{Account, NewAccount, RecurringDepositPlan};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::ledger::{LedgerRepositoryTrait, NewTransaction, TransactionType};
use crate::profiles::ProfileRepositoryTrait;

/// Service for managing bank accounts.
///
/// Ledger entries are dated at the owner's current simulation date, not the
/// wall clock.
pub struct AccountService {
    accounts: Arc<dyn AccountRepositoryTrait>,
    ledger: Arc<dyn LedgerRepositoryTrait>,
    profiles: Arc<dyn ProfileRepositoryTrait>,
}

impl AccountService {
    pub fn new(
        accounts: Arc<dyn AccountRepositoryTrait>,
        ledger: Arc<dyn LedgerRepositoryTrait>,
        profiles: Arc<dyn ProfileRepositoryTrait>,
    ) -> Self {
        Self {
            accounts,
            ledger,
            profiles,
        }
    }

    fn ensure_positive(amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Amount must be positive".to_string(),
            )));
        }
        Ok(())
    }

    fn random_account_number() -> String {
        let mut rng = rand::thread_rng();
        rng.gen_range(1_000_000_000u64..10_000_000_000u64).to_string()
    }
}

#[async_trait]
impl AccountServiceTrait for AccountService {
    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        let profile = self.profiles.get_by_owner(&new_account.owner_id)?;

        let account = Account {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: new_account.owner_id.clone(),
            bank_name: new_account.bank_name.clone(),
            account_number: Self::random_account_number(),
            account_type: new_account.account_type,
            balance: new_account.initial_deposit,
            interest_rate: new_account.interest_rate_or_default(),
            recurring_deposit: None,
            created_at: Utc::now(),
        };
        let account = self.accounts.create(account).await?;
        debug!(
            "Created account {} ({}) for owner {}",
            account.id, account.account_number, account.owner_id
        );

        if new_account.initial_deposit > Decimal::ZERO {
            self.ledger
                .append(vec![NewTransaction::new(
                    &account.owner_id,
                    &account.id,
                    TransactionType::Deposit,
                    new_account.initial_deposit,
                    "Initial Deposit",
                    profile.simulation_date,
                )])
                .await?;
        }

        Ok(account)
    }

    fn get_account(&self, owner_id: &str, account_id: &str) -> Result<Account> {
        self.accounts.get_by_id(owner_id, account_id)
    }

    fn list_accounts(&self, owner_id: &str) -> Result<Vec<Account>> {
        self.accounts.list_by_owner(owner_id)
    }

    async fn deposit(&self, owner_id: &str, account_id: &str, amount: Decimal) -> Result<Account> {
        Self::ensure_positive(amount)?;
        let profile = self.profiles.get_by_owner(owner_id)?;
        let mut account = self.accounts.get_by_id(owner_id, account_id)?;

        account.balance += amount;
        self.accounts.save(&account).await?;

        self.ledger
            .append(vec![NewTransaction::new(
                owner_id,
                account_id,
                TransactionType::Deposit,
                amount,
                "Cash Deposit",
                profile.simulation_date,
            )])
            .await?;

        Ok(account)
    }

    async fn withdraw(&self, owner_id: &str, account_id: &str, amount: Decimal) -> Result<Account> {
        Self::ensure_positive(amount)?;
        let profile = self.profiles.get_by_owner(owner_id)?;
        let mut account = self.accounts.get_by_id(owner_id, account_id)?;

        if account.balance < amount {
            return Err(Error::InsufficientFunds(format!(
                "Account {} holds less than {}",
                account_id, amount
            )));
        }

        account.balance -= amount;
        self.accounts.save(&account).await?;

        self.ledger
            .append(vec![NewTransaction::new(
                owner_id,
                account_id,
                TransactionType::Withdrawal,
                -amount,
                "Cash Withdrawal",
                profile.simulation_date,
            )])
            .await?;

        Ok(account)
    }

    async fn transfer(
        &self,
        owner_id: &str,
        from_account_id: &str,
        to_account_number: &str,
        amount: Decimal,
    ) -> Result<()> {
        Self::ensure_positive(amount)?;
        let profile = self.profiles.get_by_owner(owner_id)?;

        let mut from_account = self.accounts.get_by_id(owner_id, from_account_id)?;
        if from_account.balance < amount {
            return Err(Error::InsufficientFunds(format!(
                "Account {} holds less than {}",
                from_account_id, amount
            )));
        }

        // The destination may belong to a different owner; this is the one
        // sanctioned cross-owner mutation in the engine.
        let mut to_account = self.accounts.get_by_number(to_account_number)?;
        if to_account.id == from_account.id {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Cannot transfer to the same account".to_string(),
            )));
        }

        from_account.balance -= amount;
        to_account.balance += amount;
        self.accounts.save(&from_account).await?;
        self.accounts.save(&to_account).await?;

        self.ledger
            .append(vec![
                NewTransaction::new(
                    owner_id,
                    &from_account.id,
                    TransactionType::Transfer,
                    -amount,
                    format!(
                        "Transfer to {} ({})",
                        to_account.bank_name, to_account.account_number
                    ),
                    profile.simulation_date,
                )
                .with_related_account(&to_account.id),
                NewTransaction::new(
                    &to_account.owner_id,
                    &to_account.id,
                    TransactionType::Transfer,
                    amount,
                    format!(
                        "Transfer from {} ({})",
                        from_account.bank_name, from_account.account_number
                    ),
                    profile.simulation_date,
                )
                .with_related_account(&from_account.id),
            ])
            .await?;

        Ok(())
    }

    async fn set_recurring_deposit(
        &self,
        owner_id: &str,
        account_id: &str,
        plan: Option<RecurringDepositPlan>,
    ) -> Result<Account> {
        if let Some(plan) = &plan {
            if plan.amount <= Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Recurring deposit amount must be positive".to_string(),
                )));
            }
            if !(1..=31).contains(&plan.day_of_month) {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Recurring deposit day must be between 1 and 31".to_string(),
                )));
            }
        }

        let mut account = self.accounts.get_by_id(owner_id, account_id)?;
        account.recurring_deposit = plan;
        self.accounts.save(&account).await?;
        Ok(account)
    }
}
