//! Random draw from a collection's stored cards.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use uuid::Uuid;

use cardquiz_core::{compare, GeneratedCard};

use super::{CardGenerator, GeneratorError};
use crate::models::Collection;
use crate::store::CardStore;

/// Deals a uniformly random pre-defined card; checks answers against the
/// back of the stored card using its answer kind.
pub struct RandomCardGenerator;

#[async_trait]
impl CardGenerator for RandomCardGenerator {
    fn name(&self) -> &'static str {
        "RandomCardGenerator"
    }

    async fn get_card(
        &self,
        store: &dyn CardStore,
        collection: &Collection,
    ) -> Result<GeneratedCard, GeneratorError> {
        let cards = store.list_cards(collection.id).await?;
        let card = cards
            .choose(&mut rand::thread_rng())
            .ok_or(GeneratorError::EmptyCollection(collection.id))?;

        Ok(GeneratedCard::new(card.id.to_string(), card.front.clone()))
    }

    async fn check_card(
        &self,
        store: &dyn CardStore,
        _collection: &Collection,
        card_id: &str,
        answer: &str,
    ) -> Result<bool, GeneratorError> {
        // Card ids are UUIDs; anything else cannot name a stored card.
        let id = card_id
            .parse::<Uuid>()
            .map_err(|_| GeneratorError::CardNotFound(card_id.to_string()))?;

        let card = store
            .find_card(id)
            .await?
            .ok_or_else(|| GeneratorError::CardNotFound(card_id.to_string()))?;

        Ok(compare(&card.back, card.answer_kind, answer)?)
    }
}
