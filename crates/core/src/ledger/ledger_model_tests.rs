//! Unit tests for ledger models, pinning the stored wire format.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::ledger_model::{NewTransaction, Transaction, TransactionType};

#[test]
fn transaction_types_serialize_in_screaming_snake_case() {
    let cases = [
        (TransactionType::Deposit, "\"DEPOSIT\""),
        (TransactionType::LoanDisbursal, "\"LOAN_DISBURSAL\""),
        (TransactionType::FdCreation, "\"FD_CREATION\""),
        (TransactionType::FdMaturity, "\"FD_MATURITY\""),
        (TransactionType::Emi, "\"EMI\""),
        (TransactionType::Payment, "\"PAYMENT\""),
    ];
    for (value, wire) in cases {
        assert_eq!(serde_json::to_string(&value).unwrap(), wire);
        assert_eq!(value.as_str(), wire.trim_matches('"'));
        let parsed: TransactionType = serde_json::from_str(wire).unwrap();
        assert_eq!(parsed, value);
    }
}

#[test]
fn appending_assigns_id_and_audit_timestamp() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let new = NewTransaction::new(
        "owner-1",
        "acc-1",
        TransactionType::Withdrawal,
        dec!(-250),
        "Cash Withdrawal",
        date,
    )
    .with_related_account("acc-2");

    let transaction: Transaction = new.into();
    assert!(!transaction.id.is_empty());
    assert_eq!(transaction.date, date);
    assert_eq!(transaction.amount, dec!(-250));
    assert_eq!(transaction.related_account_id.as_deref(), Some("acc-2"));
}
