//! Shared harness wiring the engine services to a fresh in-memory store.

#![allow(dead_code)]

use chrono::NaiveDate;
use std::sync::Arc;

use finsim_core::accounts::{
    Account, AccountRepositoryTrait, AccountService, AccountServiceTrait, AccountType, NewAccount,
};
use finsim_core::credit_cards::{CreditCardRepositoryTrait, CreditCardService};
use finsim_core::ledger::LedgerRepositoryTrait;
use finsim_core::loans::{LoanRepositoryTrait, LoanService};
use finsim_core::market::{
    MarketService, SentimentService, SentimentServiceTrait, StockRepositoryTrait,
};
use finsim_core::net_worth::{NetWorthService, NetWorthServiceTrait};
use finsim_core::portfolio::{PortfolioService, PositionRepositoryTrait};
use finsim_core::profiles::{OwnerProfile, ProfileRepositoryTrait};
use finsim_core::simulation::{
    SessionRepositoryTrait, SessionService, SimulationService, SnapshotRepositoryTrait,
};
use finsim_core::term_deposits::{TermDepositRepositoryTrait, TermDepositService};
use finsim_storage_memory::MemoryStore;
use rust_decimal::Decimal;

pub struct TestEnv {
    pub store: Arc<MemoryStore>,

    // Typed repository handles
    pub accounts_repo: Arc<dyn AccountRepositoryTrait>,
    pub stocks_repo: Arc<dyn StockRepositoryTrait>,
    pub positions_repo: Arc<dyn PositionRepositoryTrait>,
    pub loans_repo: Arc<dyn LoanRepositoryTrait>,
    pub term_deposits_repo: Arc<dyn TermDepositRepositoryTrait>,
    pub cards_repo: Arc<dyn CreditCardRepositoryTrait>,
    pub ledger: Arc<dyn LedgerRepositoryTrait>,
    pub snapshots: Arc<dyn SnapshotRepositoryTrait>,
    pub sessions_repo: Arc<dyn SessionRepositoryTrait>,
    pub profiles: Arc<dyn ProfileRepositoryTrait>,

    // Services
    pub accounts: AccountService,
    pub market: MarketService,
    pub portfolio: PortfolioService,
    pub loans: LoanService,
    pub term_deposits: TermDepositService,
    pub cards: CreditCardService,
    pub net_worth: Arc<dyn NetWorthServiceTrait>,
    pub simulation: SimulationService,
    pub sessions: SessionService,
}

impl TestEnv {
    pub async fn new(owner_id: &str, start_date: NaiveDate) -> Self {
        let store = Arc::new(MemoryStore::new());

        let accounts_repo: Arc<dyn AccountRepositoryTrait> = store.clone();
        let stocks_repo: Arc<dyn StockRepositoryTrait> = store.clone();
        let positions_repo: Arc<dyn PositionRepositoryTrait> = store.clone();
        let loans_repo: Arc<dyn LoanRepositoryTrait> = store.clone();
        let term_deposits_repo: Arc<dyn TermDepositRepositoryTrait> = store.clone();
        let cards_repo: Arc<dyn CreditCardRepositoryTrait> = store.clone();
        let ledger: Arc<dyn LedgerRepositoryTrait> = store.clone();
        let snapshots: Arc<dyn SnapshotRepositoryTrait> = store.clone();
        let sessions_repo: Arc<dyn SessionRepositoryTrait> = store.clone();
        let profiles: Arc<dyn ProfileRepositoryTrait> = store.clone();

        profiles
            .save(&OwnerProfile::new(owner_id, start_date))
            .await
            .expect("profile seed");

        let sentiment: Arc<dyn SentimentServiceTrait> = Arc::new(SentimentService::new(None));
        let net_worth: Arc<dyn NetWorthServiceTrait> = Arc::new(NetWorthService::new(
            accounts_repo.clone(),
            stocks_repo.clone(),
            positions_repo.clone(),
            loans_repo.clone(),
            term_deposits_repo.clone(),
            cards_repo.clone(),
        ));

        let accounts = AccountService::new(accounts_repo.clone(), ledger.clone(), profiles.clone());
        let market = MarketService::new(stocks_repo.clone(), profiles.clone(), None);
        let portfolio = PortfolioService::new(
            positions_repo.clone(),
            stocks_repo.clone(),
            accounts_repo.clone(),
            ledger.clone(),
            profiles.clone(),
        );
        let loans = LoanService::new(
            loans_repo.clone(),
            accounts_repo.clone(),
            ledger.clone(),
            profiles.clone(),
        );
        let term_deposits = TermDepositService::new(
            term_deposits_repo.clone(),
            accounts_repo.clone(),
            ledger.clone(),
            profiles.clone(),
        );
        let cards = CreditCardService::new(
            cards_repo.clone(),
            accounts_repo.clone(),
            ledger.clone(),
            profiles.clone(),
            sessions_repo.clone(),
        );
        let simulation = SimulationService::new(
            accounts_repo.clone(),
            stocks_repo.clone(),
            positions_repo.clone(),
            loans_repo.clone(),
            term_deposits_repo.clone(),
            cards_repo.clone(),
            ledger.clone(),
            snapshots.clone(),
            sessions_repo.clone(),
            profiles.clone(),
            sentiment.clone(),
            net_worth.clone(),
        );
        let sessions = SessionService::new(
            sessions_repo.clone(),
            snapshots.clone(),
            ledger.clone(),
            profiles.clone(),
            accounts_repo.clone(),
            stocks_repo.clone(),
            loans_repo.clone(),
            term_deposits_repo.clone(),
            cards_repo.clone(),
        );

        Self {
            store,
            accounts_repo,
            stocks_repo,
            positions_repo,
            loans_repo,
            term_deposits_repo,
            cards_repo,
            ledger,
            snapshots,
            sessions_repo,
            profiles,
            accounts,
            market,
            portfolio,
            loans,
            term_deposits,
            cards,
            net_worth,
            simulation,
            sessions,
        }
    }

    /// Opens a savings account with the given balance and annual rate.
    pub async fn open_savings(
        &self,
        owner_id: &str,
        balance: Decimal,
        rate: Decimal,
    ) -> Account {
        self.accounts
            .create_account(NewAccount {
                owner_id: owner_id.to_string(),
                bank_name: "Test Bank".to_string(),
                account_type: AccountType::Savings,
                initial_deposit: balance,
                interest_rate: Some(rate),
            })
            .await
            .expect("account creation")
    }

    /// Opens a current account (no interest accrual).
    pub async fn open_current(&self, owner_id: &str, balance: Decimal) -> Account {
        self.accounts
            .create_account(NewAccount {
                owner_id: owner_id.to_string(),
                bank_name: "Test Bank".to_string(),
                account_type: AccountType::Current,
                initial_deposit: balance,
                interest_rate: Some(Decimal::ZERO),
            })
            .await
            .expect("account creation")
    }
}
