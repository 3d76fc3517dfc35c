//! Term deposit maturity engine.

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use super::term_deposits_model::{TermDeposit, TermDepositStatus};
use crate::accounts::Account;
use crate::ledger::{NewTransaction, TransactionType};

/// Compound payout at maturity: `principal * (1 + rate/100)^(elapsedYears)`,
/// with elapsed years as maturity-minus-start days over 365. Simple annual
/// compounding, independent of the deposit's declared compounding frequency.
pub fn maturity_payout(deposit: &TermDeposit) -> Decimal {
    let elapsed_days = (deposit.maturity_date - deposit.start_date).num_days();
    let elapsed_years = elapsed_days as f64 / 365.0;
    let factor = (Decimal::ONE + deposit.interest_rate / dec!(100)).powf(elapsed_years);
    deposit.principal * factor
}

/// Matures every active deposit whose maturity date has been reached,
/// crediting the payout to its source account (or the owner's first account
/// when the source is gone).
///
/// A deposit whose owner has no account at all is left active and logged as
/// an anomaly rather than force-closed.
pub fn process_matured_deposits(
    deposits: &mut [TermDeposit],
    accounts: &mut [Account],
    today: NaiveDate,
) -> Vec<NewTransaction> {
    let mut transactions = Vec::new();

    for deposit in deposits.iter_mut() {
        if !deposit.is_active() || today < deposit.maturity_date {
            continue;
        }

        let payout = maturity_payout(deposit);
        // Source account first, owner's first account as the fallback.
        let target_index = accounts
            .iter()
            .position(|a| a.id == deposit.account_id)
            .or(if accounts.is_empty() { None } else { Some(0) });
        let Some(target_index) = target_index else {
            warn!(
                "Term deposit {} matured but owner {} has no account to credit",
                deposit.id, deposit.owner_id
            );
            continue;
        };
        let target = &mut accounts[target_index];

        target.balance += payout;
        deposit.status = TermDepositStatus::Matured;
        transactions.push(NewTransaction::new(
            &deposit.owner_id,
            &target.id,
            TransactionType::FdMaturity,
            payout,
            format!("FD Matured {}", deposit.id),
            today,
        ));
        debug!(
            "Term deposit {} matured, credited {} to account {}",
            deposit.id, payout, target.id
        );
    }

    transactions
}
