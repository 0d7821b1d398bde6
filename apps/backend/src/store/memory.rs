//! In-memory card store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CardStore, StoreError};
use crate::models::{Card, Collection};

/// Card store backed by process-local maps.
///
/// Used by the integration tests and handy for local development without a
/// database. Reads never fail.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Uuid, Collection>>,
    cards: RwLock<HashMap<Uuid, Card>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a collection, replacing any previous row with the same id.
    pub async fn insert_collection(&self, collection: Collection) {
        self.collections
            .write()
            .await
            .insert(collection.id, collection);
    }

    /// Insert a card, replacing any previous row with the same id.
    pub async fn insert_card(&self, card: Card) {
        self.cards.write().await.insert(card.id, card);
    }
}

#[async_trait]
impl CardStore for MemoryStore {
    async fn list_active_collections(&self) -> Result<Vec<Collection>, StoreError> {
        let collections = self.collections.read().await;
        let mut active: Vec<Collection> = collections
            .values()
            .filter(|c| c.active)
            .cloned()
            .collect();
        active.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(active)
    }

    async fn find_collection(&self, collection_id: Uuid) -> Result<Option<Collection>, StoreError> {
        Ok(self.collections.read().await.get(&collection_id).cloned())
    }

    async fn find_card(&self, card_id: Uuid) -> Result<Option<Card>, StoreError> {
        Ok(self.cards.read().await.get(&card_id).cloned())
    }

    async fn list_cards(&self, collection_id: Uuid) -> Result<Vec<Card>, StoreError> {
        let cards = self.cards.read().await;
        let mut members: Vec<Card> = cards
            .values()
            .filter(|card| card.collection_id == collection_id)
            .cloned()
            .collect();
        members.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(members)
    }
}
