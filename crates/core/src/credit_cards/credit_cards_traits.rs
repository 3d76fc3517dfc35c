use async_trait::async_trait;
use rust_decimal::Decimal;

use super::credit_cards_model::{CreditCard, NewCreditCard};
use crate::accounts::Account;
use crate::errors::Result;

/// Trait defining the contract for credit card storage.
#[async_trait]
pub trait CreditCardRepositoryTrait: Send + Sync {
    async fn create(&self, card: CreditCard) -> Result<CreditCard>;
    fn get_by_id(&self, owner_id: &str, card_id: &str) -> Result<CreditCard>;
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<CreditCard>>;
    fn list_active_by_owner(&self, owner_id: &str) -> Result<Vec<CreditCard>>;
    async fn save(&self, card: &CreditCard) -> Result<()>;
    async fn save_all(&self, cards: &[CreditCard]) -> Result<()>;
}

/// Trait defining the contract for card operations.
#[async_trait]
pub trait CreditCardServiceTrait: Send + Sync {
    async fn open_card(&self, new_card: NewCreditCard) -> Result<CreditCard>;
    fn list_cards(&self, owner_id: &str) -> Result<Vec<CreditCard>>;
    /// Charges a purchase to the card. Declined for inactive cards,
    /// non-positive amounts, and anything that would breach the limit.
    async fn spend(
        &self,
        owner_id: &str,
        card_id: &str,
        amount: Decimal,
        description: &str,
    ) -> Result<CreditCard>;
    /// Pays the card from a bank account, clearing statement balance and
    /// minimum due proportionally.
    async fn pay_bill(
        &self,
        owner_id: &str,
        card_id: &str,
        amount: Decimal,
        from_account_id: &str,
    ) -> Result<(CreditCard, Account)>;
}
