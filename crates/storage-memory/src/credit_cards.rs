//! Credit card repository over the in-memory store.

use async_trait::async_trait;

use finsim_core::credit_cards::{CreditCard, CreditCardRepositoryTrait};
use finsim_core::errors::{Error, Result};

use crate::store::MemoryStore;

#[async_trait]
impl CreditCardRepositoryTrait for MemoryStore {
    async fn create(&self, card: CreditCard) -> Result<CreditCard> {
        self.credit_cards.insert(card.id.clone(), card.clone());
        Ok(card)
    }

    fn get_by_id(&self, owner_id: &str, card_id: &str) -> Result<CreditCard> {
        self.credit_cards
            .get(card_id)
            .filter(|c| c.owner_id == owner_id)
            .map(|c| c.clone())
            .ok_or_else(|| Error::NotFound(format!("Credit card {card_id} not found")))
    }

    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<CreditCard>> {
        let mut cards: Vec<CreditCard> = self
            .credit_cards
            .iter()
            .filter(|c| c.owner_id == owner_id)
            .map(|c| c.clone())
            .collect();
        cards.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(cards)
    }

    fn list_active_by_owner(&self, owner_id: &str) -> Result<Vec<CreditCard>> {
        Ok(self
            .list_by_owner(owner_id)?
            .into_iter()
            .filter(|c| c.is_active())
            .collect())
    }

    async fn save(&self, card: &CreditCard) -> Result<()> {
        self.credit_cards.insert(card.id.clone(), card.clone());
        Ok(())
    }

    async fn save_all(&self, cards: &[CreditCard]) -> Result<()> {
        for card in cards {
            self.credit_cards.insert(card.id.clone(), card.clone());
        }
        Ok(())
    }
}
