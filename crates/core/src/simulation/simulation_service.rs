//! The simulation clock.

use async_trait::async_trait;
use chrono::{Datelike, Duration, Utc};
use log::debug;
use std::sync::Arc;

use super::session_service::record_session_transactions;
use super::simulation_model::{AdvanceOutcome, NewSimulationSnapshot};
use super::simulation_traits::{
    SessionRepositoryTrait, SimulationServiceTrait, SnapshotRepositoryTrait,
};
use crate::accounts::{accrue_daily_interest, apply_recurring_deposits, AccountRepositoryTrait};
use crate::credit_cards::{
    apply_overdue_charges, generate_statement, overdue_charges_due, CreditCardRepositoryTrait,
};
use crate::errors::{Error, Result, ValidationError};
use crate::ledger::LedgerRepositoryTrait;
use crate::loans::{process_due_loans, LoanRepositoryTrait};
use crate::market::{advance_price, is_trading_day, SentimentServiceTrait, StockRepositoryTrait};
use crate::net_worth::{breakdown_from_entities, NetWorthServiceTrait};
use crate::portfolio::PositionRepositoryTrait;
use crate::profiles::ProfileRepositoryTrait;
use crate::term_deposits::{process_matured_deposits, TermDepositRepositoryTrait};

/// Orchestrates the day loop: loads an owner's entities once, steps the
/// virtual calendar one day at a time invoking each engine in a fixed
/// order, and persists everything in one batch at the end.
///
/// Within a day the order is: sentiment resolution, stock prices (trading
/// days only), daily savings interest, recurring deposits, loan EMIs, term
/// deposit maturities, card billing and overdue charges, then the periodic
/// net-worth snapshot.
pub struct SimulationService {
    accounts: Arc<dyn AccountRepositoryTrait>,
    stocks: Arc<dyn StockRepositoryTrait>,
    positions: Arc<dyn PositionRepositoryTrait>,
    loans: Arc<dyn LoanRepositoryTrait>,
    term_deposits: Arc<dyn TermDepositRepositoryTrait>,
    credit_cards: Arc<dyn CreditCardRepositoryTrait>,
    ledger: Arc<dyn LedgerRepositoryTrait>,
    snapshots: Arc<dyn SnapshotRepositoryTrait>,
    sessions: Arc<dyn SessionRepositoryTrait>,
    profiles: Arc<dyn ProfileRepositoryTrait>,
    sentiment: Arc<dyn SentimentServiceTrait>,
    net_worth: Arc<dyn NetWorthServiceTrait>,
}

impl SimulationService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        accounts: Arc<dyn AccountRepositoryTrait>,
        stocks: Arc<dyn StockRepositoryTrait>,
        positions: Arc<dyn PositionRepositoryTrait>,
        loans: Arc<dyn LoanRepositoryTrait>,
        term_deposits: Arc<dyn TermDepositRepositoryTrait>,
        credit_cards: Arc<dyn CreditCardRepositoryTrait>,
        ledger: Arc<dyn LedgerRepositoryTrait>,
        snapshots: Arc<dyn SnapshotRepositoryTrait>,
        sessions: Arc<dyn SessionRepositoryTrait>,
        profiles: Arc<dyn ProfileRepositoryTrait>,
        sentiment: Arc<dyn SentimentServiceTrait>,
        net_worth: Arc<dyn NetWorthServiceTrait>,
    ) -> Self {
        Self {
            accounts,
            stocks,
            positions,
            loans,
            term_deposits,
            credit_cards,
            ledger,
            snapshots,
            sessions,
            profiles,
            sentiment,
            net_worth,
        }
    }
}

#[async_trait]
impl SimulationServiceTrait for SimulationService {
    async fn advance(&self, owner_id: &str, days: u32) -> Result<AdvanceOutcome> {
        if days < 1 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Days must be a positive number".to_string(),
            )));
        }

        let mut profile = self.profiles.get_by_owner(owner_id)?;

        // Load everything once; the day loop mutates these in memory.
        let mut accounts = self.accounts.list_by_owner(owner_id)?;
        let mut stocks = self.stocks.list_by_owner(owner_id)?;
        let mut loans = self.loans.list_active_by_owner(owner_id)?;
        let mut term_deposits = self.term_deposits.list_active_by_owner(owner_id)?;
        let mut credit_cards = self.credit_cards.list_active_by_owner(owner_id)?;
        let positions = self.positions.list_by_owner(owner_id)?;

        let symbols: Vec<String> = stocks.iter().map(|s| s.symbol.clone()).collect();

        let mut current_date = profile.simulation_date;
        let mut transactions_to_create = Vec::new();
        let mut snapshots_to_create = Vec::new();

        for day in 1..=days {
            current_date = current_date + Duration::days(1);

            // 1. Per-symbol sentiment; the cache makes the per-day lookup
            // cheap and failures leave symbols unbiased.
            let sentiment = self.sentiment.directions(&symbols).await;

            // 2. Stock prices move on trading days only.
            if is_trading_day(current_date) {
                let mut rng = rand::thread_rng();
                for stock in stocks.iter_mut() {
                    let direction = sentiment.get(&stock.symbol).copied();
                    advance_price(stock, direction, current_date, &mut rng);
                    stock.last_updated = Utc::now();
                }
            }

            // 3. Daily savings interest.
            accrue_daily_interest(&mut accounts);

            // 4. Monthly recurring deposits.
            transactions_to_create.extend(apply_recurring_deposits(&mut accounts, current_date));

            // 5. Loan EMIs due today.
            transactions_to_create.extend(process_due_loans(
                &mut loans,
                &mut accounts,
                current_date,
            ));

            // 6. Term deposit maturities.
            transactions_to_create.extend(process_matured_deposits(
                &mut term_deposits,
                &mut accounts,
                current_date,
            ));

            // 7. Credit cards: statements on the billing day, charges once
            // the grace period lapses.
            for card in credit_cards.iter_mut() {
                if current_date.day() == card.billing_day {
                    generate_statement(card, current_date);
                }
                if overdue_charges_due(card, current_date) {
                    transactions_to_create.extend(apply_overdue_charges(card, current_date));
                }
            }

            // 8. Snapshot on the first simulated day and every 1st of month.
            if current_date.day() == 1 || day == 1 {
                let breakdown = breakdown_from_entities(
                    &accounts,
                    &stocks,
                    &positions,
                    &loans,
                    &term_deposits,
                    &credit_cards,
                );
                snapshots_to_create.push(NewSimulationSnapshot::from_breakdown(
                    owner_id,
                    current_date,
                    &breakdown,
                ));
            }
        }

        // Persist everything in one batch.
        self.accounts.save_all(&accounts).await?;
        self.stocks.save_all(&stocks).await?;
        self.loans.save_all(&loans).await?;
        self.term_deposits.save_all(&term_deposits).await?;
        self.credit_cards.save_all(&credit_cards).await?;

        let transaction_count = transactions_to_create.len();
        if !transactions_to_create.is_empty() {
            let created = self.ledger.append(transactions_to_create).await?;
            let ids = created.into_iter().map(|t| t.id).collect();
            record_session_transactions(self.sessions.as_ref(), owner_id, ids).await?;
        }
        if !snapshots_to_create.is_empty() {
            self.snapshots.append(snapshots_to_create).await?;
        }

        // Move the owner's calendar and cached net worth, then record the
        // final point of the run.
        profile.simulation_date = current_date;
        let breakdown = self.net_worth.compute_for_owner(owner_id)?;
        profile.virtual_net_worth = breakdown.net_worth;
        self.profiles.save(&profile).await?;

        self.snapshots
            .append(vec![NewSimulationSnapshot::from_breakdown(
                owner_id,
                current_date,
                &breakdown,
            )])
            .await?;

        debug!(
            "Advanced owner {} by {} days to {} ({} transactions)",
            owner_id, days, current_date, transaction_count
        );

        Ok(AdvanceOutcome {
            simulation_date: current_date,
            net_worth: breakdown.net_worth,
            message: format!("Simulated {days} days successfully."),
        })
    }
}
