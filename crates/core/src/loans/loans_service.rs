//! Loan origination service.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::amortization_calculator::emi_amount;
use super::loans_model::{Loan, LoanStatus, NewLoan};
use super::loans_traits::{LoanRepositoryTrait, LoanServiceTrait};
use crate::accounts::AccountRepositoryTrait;
use crate::errors::Result;
use crate::ledger::{LedgerRepositoryTrait, NewTransaction, TransactionType};
use crate::profiles::ProfileRepositoryTrait;
use rust_decimal::Decimal;

/// Service for loan applications and disbursal.
pub struct LoanService {
    loans: Arc<dyn LoanRepositoryTrait>,
    accounts: Arc<dyn AccountRepositoryTrait>,
    ledger: Arc<dyn LedgerRepositoryTrait>,
    profiles: Arc<dyn ProfileRepositoryTrait>,
}

impl LoanService {
    pub fn new(
        loans: Arc<dyn LoanRepositoryTrait>,
        accounts: Arc<dyn AccountRepositoryTrait>,
        ledger: Arc<dyn LedgerRepositoryTrait>,
        profiles: Arc<dyn ProfileRepositoryTrait>,
    ) -> Self {
        Self {
            loans,
            accounts,
            ledger,
            profiles,
        }
    }
}

#[async_trait]
impl LoanServiceTrait for LoanService {
    /// Approves a loan at the product's fixed rate, disburses the principal
    /// to the chosen account, and schedules EMIs from the owner's current
    /// simulation date.
    async fn apply_loan(&self, new_loan: NewLoan) -> Result<Loan> {
        new_loan.validate()?;
        let profile = self.profiles.get_by_owner(&new_loan.owner_id)?;
        let mut account = self
            .accounts
            .get_by_id(&new_loan.owner_id, &new_loan.account_id)?;

        let rate = new_loan.loan_type.annual_rate();
        let emi = emi_amount(new_loan.amount, rate, new_loan.tenure_months);

        let loan = Loan {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: new_loan.owner_id.clone(),
            loan_type: new_loan.loan_type,
            principal: new_loan.amount,
            interest_rate: rate,
            tenure_months: new_loan.tenure_months,
            start_date: profile.simulation_date,
            remaining_balance: new_loan.amount,
            emi_amount: emi,
            status: LoanStatus::Active,
            total_interest_paid: Decimal::ZERO,
        };
        let loan = self.loans.create(loan).await?;

        account.balance += new_loan.amount;
        self.accounts.save(&account).await?;

        self.ledger
            .append(vec![NewTransaction::new(
                &new_loan.owner_id,
                &account.id,
                TransactionType::LoanDisbursal,
                new_loan.amount,
                format!("{} Loan Disbursal", new_loan.loan_type.as_str()),
                profile.simulation_date,
            )])
            .await?;

        debug!(
            "Disbursed loan {} of {} to account {} (EMI {})",
            loan.id, loan.principal, account.id, loan.emi_amount
        );
        Ok(loan)
    }

    fn list_loans(&self, owner_id: &str) -> Result<Vec<Loan>> {
        self.loans.list_by_owner(owner_id)
    }
}
