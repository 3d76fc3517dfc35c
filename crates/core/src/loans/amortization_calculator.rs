//! Loan amortization engine.
//!
//! EMI debiting as a pure day-step over the loaded entity set. State machine
//! per loan: `ACTIVE -> CLOSED` on the final settlement, or `ACTIVE ->
//! ACTIVE` with the tenure extended by one month when the funding account
//! cannot cover the installment.

use chrono::{Datelike, NaiveDate};
use log::{debug, warn};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use super::loans_model::{Loan, LoanStatus};
use crate::accounts::Account;
use crate::ledger::{NewTransaction, TransactionType};

/// Fixed monthly installment for a loan:
/// `EMI = P * r * (1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate.
pub fn emi_amount(principal: Decimal, annual_rate: Decimal, tenure_months: u32) -> Decimal {
    let monthly_rate = annual_rate / dec!(12) / dec!(100);
    if monthly_rate.is_zero() {
        return principal / Decimal::from(tenure_months);
    }
    let growth = (Decimal::ONE + monthly_rate).powi(i64::from(tenure_months));
    principal * monthly_rate * growth / (growth - Decimal::ONE)
}

/// Whole calendar months from `earlier` to `later`, ignoring days-of-month.
pub fn months_between(later: NaiveDate, earlier: NaiveDate) -> i32 {
    (later.year() - earlier.year()) * 12 + later.month() as i32 - earlier.month() as i32
}

/// Processes every active loan whose due day (the start date's day-of-month)
/// matches `today`, debiting the owner's primary (first-listed) account.
///
/// The final settlement is debited regardless of the account balance, which
/// may legitimately drive it negative; a mid-schedule EMI is skipped instead
/// and the loan tenure grows by one month.
pub fn process_due_loans(
    loans: &mut [Loan],
    accounts: &mut [Account],
    today: NaiveDate,
) -> Vec<NewTransaction> {
    let mut transactions = Vec::new();

    for loan in loans.iter_mut() {
        if !loan.is_active() || today.day() != loan.start_date.day() {
            continue;
        }
        let Some(primary) = accounts.first_mut() else {
            warn!(
                "Loan {} due but owner {} has no account; extending tenure",
                loan.id, loan.owner_id
            );
            loan.tenure_months += 1;
            continue;
        };

        let monthly_rate = loan.interest_rate / dec!(1200);
        let interest_for_month = loan.remaining_balance * monthly_rate;
        let principal_component = loan.emi_amount - interest_for_month;

        let months_elapsed = months_between(today, loan.start_date);
        let is_final_month = months_elapsed + 1 >= loan.tenure_months as i32
            || principal_component >= loan.remaining_balance;

        if is_final_month {
            let settlement = interest_for_month + loan.remaining_balance;
            primary.balance -= settlement;
            loan.total_interest_paid += interest_for_month;
            loan.remaining_balance = Decimal::ZERO;
            loan.status = LoanStatus::Closed;
            transactions.push(NewTransaction::new(
                &loan.owner_id,
                &primary.id,
                TransactionType::Emi,
                -settlement,
                format!("Final EMI for Loan {}", loan.id),
                today,
            ));
            debug!("Loan {} settled with {} and closed", loan.id, settlement);
        } else if primary.balance >= loan.emi_amount {
            primary.balance -= loan.emi_amount;
            loan.remaining_balance =
                (loan.remaining_balance - principal_component).max(Decimal::ZERO);
            loan.total_interest_paid += interest_for_month;
            if loan.status == LoanStatus::Defaulted {
                loan.status = LoanStatus::Active;
            }
            transactions.push(NewTransaction::new(
                &loan.owner_id,
                &primary.id,
                TransactionType::Emi,
                -loan.emi_amount,
                format!("EMI for Loan {}", loan.id),
                today,
            ));
            debug!(
                "Loan {} EMI paid, remaining balance {}",
                loan.id, loan.remaining_balance
            );
        } else {
            loan.tenure_months += 1;
            warn!(
                "Loan {} EMI skipped (insufficient funds); tenure extended to {} months",
                loan.id, loan.tenure_months
            );
        }
    }

    transactions
}
