//! Net worth aggregation.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::net_worth_model::NetWorthBreakdown;
use super::net_worth_traits::NetWorthServiceTrait;
use crate::accounts::{Account, AccountRepositoryTrait};
use crate::credit_cards::{CreditCard, CreditCardRepositoryTrait};
use crate::errors::Result;
use crate::loans::{Loan, LoanRepositoryTrait};
use crate::market::{Stock, StockRepositoryTrait};
use crate::portfolio::{Position, PositionRepositoryTrait};
use crate::term_deposits::{TermDeposit, TermDepositRepositoryTrait};

/// Aggregates a net worth breakdown from an already-loaded entity set.
///
/// Status filters are applied here so the same function serves both the
/// repository-backed service and the simulation clock's in-memory snapshots
/// (where loans may have closed mid-run).
pub fn breakdown_from_entities(
    accounts: &[Account],
    stocks: &[Stock],
    positions: &[Position],
    loans: &[Loan],
    term_deposits: &[TermDeposit],
    credit_cards: &[CreditCard],
) -> NetWorthBreakdown {
    let total_bank_balance = accounts
        .iter()
        .map(|a| a.balance.max(Decimal::ZERO))
        .sum::<Decimal>();

    let quantities: HashMap<&str, Decimal> = positions
        .iter()
        .map(|p| (p.stock_id.as_str(), p.quantity))
        .collect();
    let total_stock_value = stocks
        .iter()
        .map(|s| {
            s.current_price
                * quantities
                    .get(s.id.as_str())
                    .copied()
                    .unwrap_or(Decimal::ZERO)
        })
        .sum::<Decimal>();

    let total_fd_value = term_deposits
        .iter()
        .filter(|f| f.is_active())
        .map(|f| f.principal.max(Decimal::ZERO))
        .sum::<Decimal>();

    let total_loan_liability = loans
        .iter()
        .filter(|l| l.is_active())
        .map(|l| l.remaining_balance.max(Decimal::ZERO))
        .sum::<Decimal>();

    let total_credit_card_liability = credit_cards
        .iter()
        .filter(|c| c.is_active())
        .map(|c| c.outstanding_balance.max(Decimal::ZERO))
        .sum::<Decimal>();

    NetWorthBreakdown {
        net_worth: total_bank_balance + total_stock_value + total_fd_value
            - total_loan_liability
            - total_credit_card_liability,
        total_bank_balance,
        total_stock_value,
        total_fd_value,
        total_loan_liability,
        total_credit_card_liability,
    }
}

/// Service computing net worth from stored entity state.
pub struct NetWorthService {
    accounts: Arc<dyn AccountRepositoryTrait>,
    stocks: Arc<dyn StockRepositoryTrait>,
    positions: Arc<dyn PositionRepositoryTrait>,
    loans: Arc<dyn LoanRepositoryTrait>,
    term_deposits: Arc<dyn TermDepositRepositoryTrait>,
    credit_cards: Arc<dyn CreditCardRepositoryTrait>,
}

impl NetWorthService {
    pub fn new(
        accounts: Arc<dyn AccountRepositoryTrait>,
        stocks: Arc<dyn StockRepositoryTrait>,
        positions: Arc<dyn PositionRepositoryTrait>,
        loans: Arc<dyn LoanRepositoryTrait>,
        term_deposits: Arc<dyn TermDepositRepositoryTrait>,
        credit_cards: Arc<dyn CreditCardRepositoryTrait>,
    ) -> Self {
        Self {
            accounts,
            stocks,
            positions,
            loans,
            term_deposits,
            credit_cards,
        }
    }
}

impl NetWorthServiceTrait for NetWorthService {
    fn compute_for_owner(&self, owner_id: &str) -> Result<NetWorthBreakdown> {
        let accounts = self.accounts.list_by_owner(owner_id)?;
        let stocks = self.stocks.list_by_owner(owner_id)?;
        let positions = self.positions.list_by_owner(owner_id)?;
        let loans = self.loans.list_active_by_owner(owner_id)?;
        let term_deposits = self.term_deposits.list_active_by_owner(owner_id)?;
        let credit_cards = self.credit_cards.list_active_by_owner(owner_id)?;

        Ok(breakdown_from_entities(
            &accounts,
            &stocks,
            &positions,
            &loans,
            &term_deposits,
            &credit_cards,
        ))
    }
}
