//! Term deposit service implementation.

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::term_deposits_constants::slab_rate;
use super::term_deposits_model::{
    CompoundingFrequency, NewTermDeposit, TermDeposit, TermDepositStatus,
};
use super::term_deposits_traits::{TermDepositRepositoryTrait, TermDepositServiceTrait};
use crate::accounts::AccountRepositoryTrait;
use crate::errors::{Error, Result};
use crate::ledger::{LedgerRepositoryTrait, NewTransaction, TransactionType};
use crate::profiles::ProfileRepositoryTrait;

/// Service for opening fixed deposits.
pub struct TermDepositService {
    term_deposits: Arc<dyn TermDepositRepositoryTrait>,
    accounts: Arc<dyn AccountRepositoryTrait>,
    ledger: Arc<dyn LedgerRepositoryTrait>,
    profiles: Arc<dyn ProfileRepositoryTrait>,
}

impl TermDepositService {
    pub fn new(
        term_deposits: Arc<dyn TermDepositRepositoryTrait>,
        accounts: Arc<dyn AccountRepositoryTrait>,
        ledger: Arc<dyn LedgerRepositoryTrait>,
        profiles: Arc<dyn ProfileRepositoryTrait>,
    ) -> Self {
        Self {
            term_deposits,
            accounts,
            ledger,
            profiles,
        }
    }

    fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(date.year() + years as i32, date.month(), date.day())
            // Feb 29 start in a non-leap target year.
            .unwrap_or_else(|| date + Duration::days(i64::from(years) * 365))
    }
}

#[async_trait]
impl TermDepositServiceTrait for TermDepositService {
    async fn create_term_deposit(&self, new_deposit: NewTermDeposit) -> Result<TermDeposit> {
        new_deposit.validate()?;
        let profile = self.profiles.get_by_owner(&new_deposit.owner_id)?;
        let mut account = self
            .accounts
            .get_by_id(&new_deposit.owner_id, &new_deposit.account_id)?;

        if account.balance < new_deposit.amount {
            return Err(Error::InsufficientFunds(format!(
                "Account {} holds less than {}",
                new_deposit.account_id, new_deposit.amount
            )));
        }

        let rate = slab_rate(new_deposit.tenure_years);
        let start_date = profile.simulation_date;
        let deposit = TermDeposit {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: new_deposit.owner_id.clone(),
            account_id: new_deposit.account_id.clone(),
            principal: new_deposit.amount,
            interest_rate: rate,
            start_date,
            maturity_date: Self::add_years(start_date, new_deposit.tenure_years),
            compounding_frequency: CompoundingFrequency::Quarterly,
            status: TermDepositStatus::Active,
            accumulated_interest: Decimal::ZERO,
        };
        let deposit = self.term_deposits.create(deposit).await?;

        account.balance -= new_deposit.amount;
        self.accounts.save(&account).await?;

        self.ledger
            .append(vec![NewTransaction::new(
                &new_deposit.owner_id,
                &new_deposit.account_id,
                TransactionType::FdCreation,
                -new_deposit.amount,
                format!("FD Created (Rate: {rate}%)"),
                start_date,
            )])
            .await?;

        debug!(
            "Opened term deposit {} of {} at {}% maturing {}",
            deposit.id, deposit.principal, rate, deposit.maturity_date
        );
        Ok(deposit)
    }

    fn list_term_deposits(&self, owner_id: &str) -> Result<Vec<TermDeposit>> {
        self.term_deposits.list_by_owner(owner_id)
    }
}
