//! Credit card billing engine.
//!
//! Two independent day-step triggers: statement generation on the card's
//! billing day, and a one-shot overdue charge (interest + late fee) on the
//! day exactly one calendar day after the due date.

use chrono::{Datelike, Duration, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::credit_cards_constants::{LATE_FEE, MINIMUM_DUE_FLOOR};
use super::credit_cards_model::CreditCard;
use crate::ledger::{NewTransaction, TransactionType};

/// Freezes the statement: the current outstanding balance becomes the
/// statement balance (a snapshot, not cycle-isolated spend), the minimum due
/// is floored, and the due date is set from the card's offset.
pub fn generate_statement(card: &mut CreditCard, today: NaiveDate) {
    let statement_balance = card.outstanding_balance;
    let minimum_due = (statement_balance * card.minimum_due_percent).max(MINIMUM_DUE_FLOOR);

    card.statement_balance = statement_balance;
    card.minimum_due = if statement_balance > Decimal::ZERO {
        minimum_due.min(statement_balance)
    } else {
        Decimal::ZERO
    };
    card.last_statement_date = Some(today);
    card.next_due_date = Some(today + Duration::days(card.due_day_offset));
    debug!(
        "Card {} statement: balance {}, minimum due {}, due {}",
        card.id,
        card.statement_balance,
        card.minimum_due,
        today + Duration::days(card.due_day_offset)
    );
}

/// True on the day the grace period has just lapsed: exactly one calendar
/// day after the due date.
pub fn overdue_charges_due(card: &CreditCard, today: NaiveDate) -> bool {
    match card.next_due_date {
        Some(due) => today == due + Duration::days(1),
        None => false,
    }
}

/// Applies overdue interest and the flat late fee, at most once per calendar
/// month per card.
///
/// Interest is charged on the whole outstanding balance at the monthly rate,
/// and both charges reduce available credit, which may transiently break the
/// `available + outstanding = limit` relation.
pub fn apply_overdue_charges(card: &mut CreditCard, today: NaiveDate) -> Vec<NewTransaction> {
    // Idempotency guard: skip when already applied this calendar month.
    if let Some(last) = card.last_interest_applied_date {
        if last.month() == today.month() && last.year() == today.year() {
            return Vec::new();
        }
    }
    let past_due = card
        .next_due_date
        .map(|due| today > due)
        .unwrap_or(false);
    if !past_due || card.statement_balance <= Decimal::ZERO {
        return Vec::new();
    }

    let monthly_rate = card.interest_rate / dec!(100) / dec!(12);
    let interest = card.outstanding_balance * monthly_rate;

    card.outstanding_balance += interest;
    card.available_credit -= interest;
    card.total_interest_paid += interest;

    card.outstanding_balance += LATE_FEE;
    card.available_credit -= LATE_FEE;
    card.missed_payments_count += 1;
    card.last_interest_applied_date = Some(today);

    debug!(
        "Card {} overdue: interest {}, late fee {}, missed payments {}",
        card.id, interest, LATE_FEE, card.missed_payments_count
    );

    vec![
        NewTransaction::new(
            &card.owner_id,
            &card.id,
            TransactionType::Interest,
            -interest,
            "Credit Card Interest Charge",
            today,
        ),
        NewTransaction::new(
            &card.owner_id,
            &card.id,
            TransactionType::Expense,
            -LATE_FEE,
            "Credit Card Late Fee",
            today,
        ),
    ]
}
