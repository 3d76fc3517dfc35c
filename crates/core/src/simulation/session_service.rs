//! Session sandbox implementation.

use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use super::session_model::{SessionBaseline, SimulationSession};
use super::simulation_model::SessionStatus;
use super::simulation_traits::{
    SessionRepositoryTrait, SessionServiceTrait, SnapshotRepositoryTrait,
};
use crate::accounts::AccountRepositoryTrait;
use crate::credit_cards::CreditCardRepositoryTrait;
use crate::errors::{Error, Result};
use crate::ledger::LedgerRepositoryTrait;
use crate::loans::LoanRepositoryTrait;
use crate::market::StockRepositoryTrait;
use crate::profiles::ProfileRepositoryTrait;
use crate::term_deposits::TermDepositRepositoryTrait;

/// Registers ledger entries with the owner's active session so a rollback
/// can purge them. A no-op when no session is active or no ids are given.
pub async fn record_session_transactions(
    sessions: &dyn SessionRepositoryTrait,
    owner_id: &str,
    transaction_ids: Vec<String>,
) -> Result<()> {
    if transaction_ids.is_empty() {
        return Ok(());
    }
    let Some(mut session) = sessions.find_active(owner_id)? else {
        return Ok(());
    };
    session.transactions_created.extend(transaction_ids);
    sessions.save(&session).await
}

/// The session sandbox: captures a baseline at start and restores it
/// verbatim at end, deleting every transaction created in between.
pub struct SessionService {
    sessions: Arc<dyn SessionRepositoryTrait>,
    snapshots: Arc<dyn SnapshotRepositoryTrait>,
    ledger: Arc<dyn LedgerRepositoryTrait>,
    profiles: Arc<dyn ProfileRepositoryTrait>,
    accounts: Arc<dyn AccountRepositoryTrait>,
    stocks: Arc<dyn StockRepositoryTrait>,
    loans: Arc<dyn LoanRepositoryTrait>,
    term_deposits: Arc<dyn TermDepositRepositoryTrait>,
    credit_cards: Arc<dyn CreditCardRepositoryTrait>,
}

impl SessionService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sessions: Arc<dyn SessionRepositoryTrait>,
        snapshots: Arc<dyn SnapshotRepositoryTrait>,
        ledger: Arc<dyn LedgerRepositoryTrait>,
        profiles: Arc<dyn ProfileRepositoryTrait>,
        accounts: Arc<dyn AccountRepositoryTrait>,
        stocks: Arc<dyn StockRepositoryTrait>,
        loans: Arc<dyn LoanRepositoryTrait>,
        term_deposits: Arc<dyn TermDepositRepositoryTrait>,
        credit_cards: Arc<dyn CreditCardRepositoryTrait>,
    ) -> Self {
        Self {
            sessions,
            snapshots,
            ledger,
            profiles,
            accounts,
            stocks,
            loans,
            term_deposits,
            credit_cards,
        }
    }

    async fn restore_baseline(&self, owner_id: &str, baseline: &SessionBaseline) -> Result<()> {
        let mut profile = self.profiles.get_by_owner(owner_id)?;
        profile.simulation_date = baseline.profile.simulation_date;
        profile.virtual_net_worth = baseline.profile.virtual_net_worth;
        self.profiles.save(&profile).await?;

        for captured in &baseline.accounts {
            match self.accounts.get_by_id(owner_id, &captured.account_id) {
                Ok(mut account) => {
                    captured.restore(&mut account);
                    self.accounts.save(&account).await?;
                }
                Err(Error::NotFound(_)) => {
                    warn!("Account {} vanished mid-session", captured.account_id)
                }
                Err(e) => return Err(e),
            }
        }

        for captured in &baseline.stocks {
            match self.stocks.get_by_id(owner_id, &captured.stock_id) {
                Ok(mut stock) => {
                    captured.restore(&mut stock);
                    self.stocks.save(&stock).await?;
                }
                Err(Error::NotFound(_)) => {
                    warn!("Stock {} vanished mid-session", captured.stock_id)
                }
                Err(e) => return Err(e),
            }
        }

        for captured in &baseline.loans {
            match self.loans.get_by_id(owner_id, &captured.loan_id) {
                Ok(mut loan) => {
                    captured.restore(&mut loan);
                    self.loans.save(&loan).await?;
                }
                Err(Error::NotFound(_)) => warn!("Loan {} vanished mid-session", captured.loan_id),
                Err(e) => return Err(e),
            }
        }

        for captured in &baseline.term_deposits {
            match self
                .term_deposits
                .get_by_id(owner_id, &captured.term_deposit_id)
            {
                Ok(mut deposit) => {
                    captured.restore(&mut deposit);
                    self.term_deposits.save(&deposit).await?;
                }
                Err(Error::NotFound(_)) => {
                    warn!("Term deposit {} vanished mid-session", captured.term_deposit_id)
                }
                Err(e) => return Err(e),
            }
        }

        for captured in &baseline.credit_cards {
            match self.credit_cards.get_by_id(owner_id, &captured.card_id) {
                Ok(mut card) => {
                    captured.restore(&mut card);
                    self.credit_cards.save(&card).await?;
                }
                Err(Error::NotFound(_)) => {
                    warn!("Credit card {} vanished mid-session", captured.card_id)
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}

#[async_trait]
impl SessionServiceTrait for SessionService {
    /// Starts a sandbox session. Any session already in flight is ended
    /// first (restoring its baseline) so the new baseline is clean. Prior
    /// snapshots are cleared so charts reflect only this session.
    async fn start_session(&self, owner_id: &str) -> Result<String> {
        if self.sessions.find_active(owner_id)?.is_some() {
            info!(
                "Active session found for owner {}; restoring baseline before restarting",
                owner_id
            );
            self.end_session(owner_id).await?;
        }

        let profile = self.profiles.get_by_owner(owner_id)?;
        let accounts = self.accounts.list_by_owner(owner_id)?;
        let stocks = self.stocks.list_by_owner(owner_id)?;
        let loans = self.loans.list_by_owner(owner_id)?;
        let term_deposits = self.term_deposits.list_by_owner(owner_id)?;
        let credit_cards = self.credit_cards.list_by_owner(owner_id)?;

        let baseline = SessionBaseline::capture(
            &profile,
            &accounts,
            &stocks,
            &loans,
            &term_deposits,
            &credit_cards,
        );
        self.sessions
            .upsert(SimulationSession::start(owner_id, baseline))
            .await?;

        self.snapshots.delete_by_owner(owner_id).await?;

        Ok("Simulation session started".to_string())
    }

    /// Ends the active session: restores every captured field, purges the
    /// session's transactions, and deactivates the session. A no-op when no
    /// session is active.
    async fn end_session(&self, owner_id: &str) -> Result<String> {
        let Some(mut session) = self.sessions.find_active(owner_id)? else {
            return Ok("No active session".to_string());
        };

        self.restore_baseline(owner_id, &session.baseline).await?;

        if !session.transactions_created.is_empty() {
            self.ledger
                .delete_by_ids(&session.transactions_created)
                .await?;
        }

        session.active = false;
        self.sessions.save(&session).await?;

        info!("Session {} ended for owner {}", session.id, owner_id);
        Ok("Simulation session ended and original values restored".to_string())
    }

    fn session_status(&self, owner_id: &str) -> Result<SessionStatus> {
        Ok(SessionStatus {
            active: self.sessions.find_active(owner_id)?.is_some(),
        })
    }
}
