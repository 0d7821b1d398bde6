//! Generator dispatch.
//!
//! The dispatcher sits between the HTTP handlers and the generators: it
//! resolves a collection's configured generator through the registry,
//! invokes it, and normalizes every generator failure into an [`ApiError`].
//! Nothing below this layer leaks raw to the HTTP boundary.

use std::sync::Arc;

use cardquiz_core::GeneratedCard;

use crate::error::ApiError;
use crate::generators::{CardGenerator, GeneratorError, GeneratorRegistry};
use crate::models::Collection;
use crate::store::CardStore;

pub struct Dispatcher {
    registry: GeneratorRegistry,
}

impl Dispatcher {
    pub fn new(registry: GeneratorRegistry) -> Self {
        Self { registry }
    }

    /// Deal a card from the collection via its configured generator.
    pub async fn deal(
        &self,
        store: &dyn CardStore,
        collection: &Collection,
    ) -> Result<GeneratedCard, ApiError> {
        let generator = self.resolve(collection).map_err(generation_failure)?;

        generator
            .get_card(store, collection)
            .await
            .map_err(generation_failure)
    }

    /// Check an answer against a card id via the collection's generator.
    pub async fn check(
        &self,
        store: &dyn CardStore,
        collection: &Collection,
        card_id: &str,
        answer: &str,
    ) -> Result<bool, ApiError> {
        let generator = self.resolve(collection).map_err(check_failure)?;

        generator
            .check_card(store, collection, card_id, answer)
            .await
            .map_err(check_failure)
    }

    fn resolve(
        &self,
        collection: &Collection,
    ) -> Result<Arc<dyn CardGenerator>, GeneratorError> {
        self.registry.get(&collection.generator).ok_or_else(|| {
            tracing::warn!(
                collection_id = %collection.id,
                generator = %collection.generator,
                "collection references an unregistered generator"
            );
            GeneratorError::UnknownGenerator(collection.generator.clone())
        })
    }
}

/// Card-not-found stays a client error; every other generator failure
/// becomes a server error carrying the underlying cause.
fn generation_failure(err: GeneratorError) -> ApiError {
    match err {
        GeneratorError::CardNotFound(id) => ApiError::CardNotFound(id),
        err => ApiError::GenerationFailed(err.to_string()),
    }
}

fn check_failure(err: GeneratorError) -> ApiError {
    match err {
        GeneratorError::CardNotFound(id) => ApiError::CardNotFound(id),
        err => ApiError::CheckFailed(err.to_string()),
    }
}
