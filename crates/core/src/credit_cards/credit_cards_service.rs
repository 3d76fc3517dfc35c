//! Credit card service implementation.
//!
//! Spend and bill payment happen outside the day loop but inside the sandbox
//! contract: their ledger entries are registered with any active session so
//! a rollback can purge them.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rand::Rng;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::credit_cards_constants::{
    DEFAULT_BILLING_DAY, DEFAULT_CARD_INTEREST_RATE, DEFAULT_DUE_DAY_OFFSET,
    DEFAULT_MINIMUM_DUE_PERCENT,
};
use super::credit_cards_model::{CreditCard, CreditCardStatus, NewCreditCard};
use super::credit_cards_traits::{CreditCardRepositoryTrait, CreditCardServiceTrait};
use crate::accounts::{Account, AccountRepositoryTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::ledger::{LedgerRepositoryTrait, NewTransaction, TransactionType};
use crate::profiles::ProfileRepositoryTrait;
use crate::simulation::{record_session_transactions, SessionRepositoryTrait};

/// Service for issuing and operating credit cards.
pub struct CreditCardService {
    cards: Arc<dyn CreditCardRepositoryTrait>,
    accounts: Arc<dyn AccountRepositoryTrait>,
    ledger: Arc<dyn LedgerRepositoryTrait>,
    profiles: Arc<dyn ProfileRepositoryTrait>,
    sessions: Arc<dyn SessionRepositoryTrait>,
}

impl CreditCardService {
    pub fn new(
        cards: Arc<dyn CreditCardRepositoryTrait>,
        accounts: Arc<dyn AccountRepositoryTrait>,
        ledger: Arc<dyn LedgerRepositoryTrait>,
        profiles: Arc<dyn ProfileRepositoryTrait>,
        sessions: Arc<dyn SessionRepositoryTrait>,
    ) -> Self {
        Self {
            cards,
            accounts,
            ledger,
            profiles,
            sessions,
        }
    }

    fn random_card_number() -> String {
        let mut rng = rand::thread_rng();
        format!("4{:015}", rng.gen_range(0..1_000_000_000_000_000u64))
    }
}

#[async_trait]
impl CreditCardServiceTrait for CreditCardService {
    async fn open_card(&self, new_card: NewCreditCard) -> Result<CreditCard> {
        new_card.validate()?;
        let limit = new_card.credit_limit_or_default();

        let card = CreditCard {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: new_card.owner_id.clone(),
            card_name: new_card
                .card_name
                .unwrap_or_else(|| "Platinum Rewards".to_string()),
            card_number: Self::random_card_number(),
            credit_limit: limit,
            outstanding_balance: Decimal::ZERO,
            available_credit: limit,
            interest_rate: DEFAULT_CARD_INTEREST_RATE,
            billing_day: DEFAULT_BILLING_DAY,
            due_day_offset: DEFAULT_DUE_DAY_OFFSET,
            minimum_due_percent: DEFAULT_MINIMUM_DUE_PERCENT,
            statement_balance: Decimal::ZERO,
            minimum_due: Decimal::ZERO,
            total_interest_paid: Decimal::ZERO,
            missed_payments_count: 0,
            last_statement_date: None,
            next_due_date: None,
            last_interest_applied_date: None,
            status: CreditCardStatus::Active,
            created_at: Utc::now(),
        };
        let card = self.cards.create(card).await?;
        debug!("Issued card {} with limit {}", card.id, card.credit_limit);
        Ok(card)
    }

    fn list_cards(&self, owner_id: &str) -> Result<Vec<CreditCard>> {
        self.cards.list_by_owner(owner_id)
    }

    async fn spend(
        &self,
        owner_id: &str,
        card_id: &str,
        amount: Decimal,
        description: &str,
    ) -> Result<CreditCard> {
        let profile = self.profiles.get_by_owner(owner_id)?;
        let mut card = self.cards.get_by_id(owner_id, card_id)?;

        if !card.is_active() {
            return Err(Error::Declined("Card is not active".to_string()));
        }
        if amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Amount must be positive".to_string(),
            )));
        }
        if card.outstanding_balance + amount > card.credit_limit {
            return Err(Error::Declined("Over credit limit".to_string()));
        }

        card.outstanding_balance += amount;
        card.available_credit -= amount;
        self.cards.save(&card).await?;

        let created = self
            .ledger
            .append(vec![NewTransaction::new(
                owner_id,
                card_id,
                TransactionType::Expense,
                -amount,
                format!("{description} (Credit Card)"),
                profile.simulation_date,
            )])
            .await?;
        let ids = created.into_iter().map(|t| t.id).collect();
        record_session_transactions(self.sessions.as_ref(), owner_id, ids).await?;

        Ok(card)
    }

    async fn pay_bill(
        &self,
        owner_id: &str,
        card_id: &str,
        amount: Decimal,
        from_account_id: &str,
    ) -> Result<(CreditCard, Account)> {
        if amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Amount must be positive".to_string(),
            )));
        }
        let profile = self.profiles.get_by_owner(owner_id)?;
        let mut card = self.cards.get_by_id(owner_id, card_id)?;
        let mut account = self.accounts.get_by_id(owner_id, from_account_id)?;

        if account.balance < amount {
            return Err(Error::InsufficientFunds(format!(
                "Account {} holds less than {}",
                from_account_id, amount
            )));
        }

        account.balance -= amount;
        self.accounts.save(&account).await?;

        card.outstanding_balance -= amount;
        card.available_credit += amount;
        if card.statement_balance > Decimal::ZERO {
            card.statement_balance = (card.statement_balance - amount).max(Decimal::ZERO);
        }
        if card.minimum_due > Decimal::ZERO {
            card.minimum_due = (card.minimum_due - amount).max(Decimal::ZERO);
        }
        self.cards.save(&card).await?;

        let created = self
            .ledger
            .append(vec![NewTransaction::new(
                owner_id,
                from_account_id,
                TransactionType::Payment,
                -amount,
                format!("Credit Card Bill Payment ({})", card.masked_number()),
                profile.simulation_date,
            )])
            .await?;
        let ids = created.into_iter().map(|t| t.id).collect();
        record_session_transactions(self.sessions.as_ref(), owner_id, ids).await?;

        debug!(
            "Card {} paid {} from account {}; outstanding now {}",
            card_id, amount, from_account_id, card.outstanding_balance
        );
        Ok((card, account))
    }
}
