//! Common test utilities and fixtures for integration tests.
//!
//! The API tests run hermetically against the in-memory store; only the
//! PostgreSQL suite (`store_postgres.rs`) needs a real database.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;

use cardquiz_backend::dispatch::Dispatcher;
use cardquiz_backend::generators::GeneratorRegistry;
use cardquiz_backend::models::{Card, Collection};
use cardquiz_backend::store::{CardStore, MemoryStore};
use cardquiz_backend::AppState;

/// Test context wiring the full router against an in-memory store.
pub struct TestContext {
    pub store: Arc<MemoryStore>,
    app: Router,
}

impl TestContext {
    /// Create a new test context with the built-in generators registered.
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let state = AppState {
            store: store.clone() as Arc<dyn CardStore>,
            dispatcher: Arc::new(Dispatcher::new(GeneratorRegistry::with_builtins())),
        };
        let app = cardquiz_backend::router(state);

        Self { store, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Seed a collection and hand it back.
    pub async fn seed_collection(&self, collection: Collection) -> Collection {
        self.store.insert_collection(collection.clone()).await;
        collection
    }

    /// Seed a card and hand it back.
    pub async fn seed_card(&self, card: Card) -> Card {
        self.store.insert_card(card.clone()).await;
        card
    }
}
