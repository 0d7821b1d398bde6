//! Card storage boundary

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::Database;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Card, Collection};

/// Errors from the storage layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read-only access to collections and their pre-defined cards.
///
/// Collections and cards are written by administrative tooling outside this
/// service; the quiz flow only ever reads. The concrete stores expose insert
/// helpers as inherent methods for tests and tooling, but those never appear
/// on this trait.
#[async_trait]
pub trait CardStore: Send + Sync {
    /// All collections with `active` set, in creation order.
    async fn list_active_collections(&self) -> Result<Vec<Collection>, StoreError>;

    /// Look up a collection by id.
    async fn find_collection(&self, collection_id: Uuid) -> Result<Option<Collection>, StoreError>;

    /// Look up a card by id.
    async fn find_card(&self, card_id: Uuid) -> Result<Option<Card>, StoreError>;

    /// All cards belonging to a collection, in creation order.
    async fn list_cards(&self, collection_id: Uuid) -> Result<Vec<Card>, StoreError>;
}
