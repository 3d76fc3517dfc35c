//! Integration tests for externally-triggered operations: transfers,
//! trading, card spend/payment, and term deposit lifecycle.

mod common;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use common::TestEnv;
use finsim_core::accounts::AccountServiceTrait;
use finsim_core::credit_cards::{CreditCardServiceTrait, NewCreditCard};
use finsim_core::errors::Error;
use finsim_core::ledger::TransactionType;
use finsim_core::loans::{LoanServiceTrait, LoanType, NewLoan};
use finsim_core::market::MarketServiceTrait;
use finsim_core::portfolio::PortfolioServiceTrait;
use finsim_core::profiles::OwnerProfile;
use finsim_core::simulation::SimulationServiceTrait;
use finsim_core::term_deposits::{
    NewTermDeposit, TermDepositServiceTrait, TermDepositStatus,
};

const OWNER: &str = "owner-1";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn an_overlimit_spend_is_declined_without_effect() {
    let env = TestEnv::new(OWNER, date(2024, 3, 1)).await;
    let card = env
        .cards
        .open_card(NewCreditCard {
            owner_id: OWNER.to_string(),
            card_name: None,
            credit_limit: Some(dec!(50000)),
        })
        .await
        .unwrap();

    let result = env.cards.spend(OWNER, &card.id, dec!(60000), "Car").await;
    assert!(matches!(result, Err(Error::Declined(_))));

    let card = env.cards_repo.get_by_id(OWNER, &card.id).unwrap();
    assert_eq!(card.outstanding_balance, Decimal::ZERO);
    assert_eq!(card.available_credit, dec!(50000));
    assert!(env.ledger.list_by_owner(OWNER).unwrap().is_empty());
}

#[tokio::test]
async fn nonpositive_and_inactive_spends_are_rejected() {
    let env = TestEnv::new(OWNER, date(2024, 3, 1)).await;
    let card = env
        .cards
        .open_card(NewCreditCard {
            owner_id: OWNER.to_string(),
            card_name: None,
            credit_limit: None,
        })
        .await
        .unwrap();

    let zero = env.cards.spend(OWNER, &card.id, Decimal::ZERO, "Nothing").await;
    assert!(matches!(zero, Err(Error::Validation(_))));

    let mut blocked = env.cards_repo.get_by_id(OWNER, &card.id).unwrap();
    blocked.status = finsim_core::credit_cards::CreditCardStatus::Blocked;
    env.cards_repo.save(&blocked).await.unwrap();
    let declined = env.cards.spend(OWNER, &card.id, dec!(100), "Coffee").await;
    assert!(matches!(declined, Err(Error::Declined(_))));
}

#[tokio::test]
async fn paying_a_bill_moves_money_and_clears_dues() {
    let env = TestEnv::new(OWNER, date(2024, 3, 25)).await;
    let account = env.open_current(OWNER, dec!(5000)).await;
    let card = env
        .cards
        .open_card(NewCreditCard {
            owner_id: OWNER.to_string(),
            card_name: None,
            credit_limit: None,
        })
        .await
        .unwrap();
    env.cards
        .spend(OWNER, &card.id, dec!(3000), "Flights")
        .await
        .unwrap();

    // Generate a statement by crossing the billing day.
    env.simulation.advance(OWNER, 7).await.unwrap();

    let (card_after, account_after) = env
        .cards
        .pay_bill(OWNER, &card.id, dec!(2000), &account.id)
        .await
        .unwrap();
    assert_eq!(card_after.outstanding_balance, dec!(1000));
    assert_eq!(card_after.available_credit, dec!(49000));
    assert_eq!(card_after.statement_balance, dec!(1000));
    // Minimum due was the 500 floor; the payment cleared it.
    assert_eq!(card_after.minimum_due, Decimal::ZERO);
    assert_eq!(account_after.balance, dec!(3000));

    let overdraw = env
        .cards
        .pay_bill(OWNER, &card.id, dec!(10000), &account.id)
        .await;
    assert!(matches!(overdraw, Err(Error::InsufficientFunds(_))));
}

#[tokio::test]
async fn transfers_cross_owner_boundaries() {
    let env = TestEnv::new(OWNER, date(2024, 3, 1)).await;
    env.profiles
        .save(&OwnerProfile::new("owner-2", date(2024, 3, 1)))
        .await
        .unwrap();
    let source = env.open_current(OWNER, dec!(5000)).await;
    let destination = env.open_current("owner-2", dec!(100)).await;

    env.accounts
        .transfer(OWNER, &source.id, &destination.account_number, dec!(1500))
        .await
        .unwrap();

    assert_eq!(
        env.accounts_repo.get_by_id(OWNER, &source.id).unwrap().balance,
        dec!(3500)
    );
    assert_eq!(
        env.accounts_repo
            .get_by_id("owner-2", &destination.id)
            .unwrap()
            .balance,
        dec!(1600)
    );

    // One signed entry per side, each naming the counterparty.
    let sender_side = env.ledger.list_by_owner(OWNER).unwrap();
    let transfer_out: Vec<_> = sender_side
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Transfer)
        .collect();
    assert_eq!(transfer_out.len(), 1);
    assert_eq!(transfer_out[0].amount, dec!(-1500));
    assert_eq!(
        transfer_out[0].related_account_id.as_deref(),
        Some(destination.id.as_str())
    );

    let receiver_side = env.ledger.list_by_owner("owner-2").unwrap();
    let transfer_in: Vec<_> = receiver_side
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Transfer)
        .collect();
    assert_eq!(transfer_in.len(), 1);
    assert_eq!(transfer_in[0].amount, dec!(1500));
}

#[tokio::test]
async fn insufficient_transfers_and_withdrawals_have_no_partial_effect() {
    let env = TestEnv::new(OWNER, date(2024, 3, 1)).await;
    let source = env.open_current(OWNER, dec!(100)).await;
    let other = env.open_current(OWNER, dec!(0)).await;

    let transfer = env
        .accounts
        .transfer(OWNER, &source.id, &other.account_number, dec!(500))
        .await;
    assert!(matches!(transfer, Err(Error::InsufficientFunds(_))));

    let withdraw = env.accounts.withdraw(OWNER, &source.id, dec!(500)).await;
    assert!(matches!(withdraw, Err(Error::InsufficientFunds(_))));

    assert_eq!(
        env.accounts_repo.get_by_id(OWNER, &source.id).unwrap().balance,
        dec!(100)
    );
    assert_eq!(
        env.accounts_repo.get_by_id(OWNER, &other.id).unwrap().balance,
        Decimal::ZERO
    );
}

#[tokio::test]
async fn buying_and_selling_maintains_the_position() {
    let env = TestEnv::new(OWNER, date(2024, 3, 1)).await;
    let account = env.open_current(OWNER, dec!(10000)).await;
    env.market.initialize_owner_market(OWNER).await.unwrap();
    let techx = env
        .stocks_repo
        .get_by_symbol(OWNER, "TECHX")
        .unwrap()
        .unwrap();

    // 10 shares at the 150 seed price.
    env.portfolio
        .buy_stock(OWNER, &techx.id, dec!(10), &account.id)
        .await
        .unwrap();

    // Reprice and average in 10 more.
    let mut repriced = env.stocks_repo.get_by_id(OWNER, &techx.id).unwrap();
    repriced.current_price = dec!(250);
    env.stocks_repo.save(&repriced).await.unwrap();
    let position = env
        .portfolio
        .buy_stock(OWNER, &techx.id, dec!(10), &account.id)
        .await
        .unwrap();
    assert_eq!(position.quantity, dec!(20));
    assert_eq!(position.average_buy_price, dec!(200));

    // 10000 - 1500 - 2500.
    assert_eq!(
        env.accounts_repo.get_by_id(OWNER, &account.id).unwrap().balance,
        dec!(6000)
    );

    let oversell = env
        .portfolio
        .sell_stock(OWNER, &techx.id, dec!(25), &account.id)
        .await;
    assert!(matches!(oversell, Err(Error::Validation(_))));

    // Selling out entirely removes the position.
    env.portfolio
        .sell_stock(OWNER, &techx.id, dec!(20), &account.id)
        .await
        .unwrap();
    assert!(env
        .positions_repo
        .find(OWNER, &techx.id)
        .unwrap()
        .is_none());
    assert_eq!(
        env.accounts_repo.get_by_id(OWNER, &account.id).unwrap().balance,
        dec!(11000)
    );
}

#[tokio::test]
async fn a_term_deposit_matures_through_the_day_loop() {
    let env = TestEnv::new(OWNER, date(2024, 1, 10)).await;
    let account = env.open_current(OWNER, dec!(10000)).await;

    let deposit = env
        .term_deposits
        .create_term_deposit(NewTermDeposit {
            owner_id: OWNER.to_string(),
            account_id: account.id.clone(),
            amount: dec!(5000),
            tenure_years: 1,
        })
        .await
        .unwrap();
    assert_eq!(deposit.interest_rate, dec!(6.5));
    assert_eq!(deposit.maturity_date, date(2025, 1, 10));
    assert_eq!(
        env.accounts_repo.get_by_id(OWNER, &account.id).unwrap().balance,
        dec!(5000)
    );

    env.simulation.advance(OWNER, 366).await.unwrap();

    let deposit = env
        .term_deposits_repo
        .get_by_id(OWNER, &deposit.id)
        .unwrap();
    assert_eq!(deposit.status, TermDepositStatus::Matured);

    let account = env.accounts_repo.get_by_id(OWNER, &account.id).unwrap();
    // Principal came back with about 6.5% on top.
    assert!(account.balance > dec!(10300));

    let maturities: Vec<_> = env
        .ledger
        .list_by_owner(OWNER)
        .unwrap()
        .into_iter()
        .filter(|t| t.transaction_type == TransactionType::FdMaturity)
        .collect();
    assert_eq!(maturities.len(), 1);
    assert!(maturities[0].amount > dec!(5300));
}

#[tokio::test]
async fn an_underfunded_loan_extends_instead_of_defaulting() {
    let env = TestEnv::new(OWNER, date(2024, 1, 15)).await;
    let account = env.open_current(OWNER, dec!(100)).await;
    let loan = env
        .loans
        .apply_loan(NewLoan {
            owner_id: OWNER.to_string(),
            loan_type: LoanType::Personal,
            amount: dec!(12000),
            tenure_months: 12,
            account_id: account.id.clone(),
        })
        .await
        .unwrap();

    // Drain the disbursal so the first EMI cannot be met.
    env.accounts
        .withdraw(OWNER, &account.id, dec!(11900))
        .await
        .unwrap();

    env.simulation.advance(OWNER, 32).await.unwrap();

    let loan = env.loans_repo.get_by_id(OWNER, &loan.id).unwrap();
    assert_eq!(loan.tenure_months, 13);
    assert_eq!(loan.remaining_balance, dec!(12000));

    let emis = env
        .ledger
        .list_by_owner(OWNER)
        .unwrap()
        .into_iter()
        .filter(|t| t.transaction_type == TransactionType::Emi)
        .count();
    assert_eq!(emis, 0);
}
