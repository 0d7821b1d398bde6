//! Card generators.
//!
//! A generator is the strategy behind a collection: it deals a card
//! (question plus opaque identifier) and checks a submitted answer against
//! an identifier. Generators are resolved by name through the
//! [`GeneratorRegistry`], so new ones can be added without touching the
//! dispatcher.

mod arithmetic;
mod random;
mod registry;

pub use arithmetic::ArithmeticCardGenerator;
pub use random::RandomCardGenerator;
pub use registry::GeneratorRegistry;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use cardquiz_core::{CheckError, CompareError, GeneratedCard};

use crate::models::Collection;
use crate::store::{CardStore, StoreError};

/// Errors from the card-generation subsystem.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The collection names a generator nobody registered.
    #[error("unknown generator")]
    UnknownGenerator(String),

    /// A random draw was requested from a collection without cards.
    #[error("collection {0} has no cards")]
    EmptyCollection(Uuid),

    /// The card id does not refer to a stored card.
    #[error("card {0:?} not found")]
    CardNotFound(String),

    /// Checking an arithmetic identifier failed.
    #[error(transparent)]
    Answer(#[from] CheckError),

    /// Comparing against a stored answer failed.
    #[error(transparent)]
    Compare(#[from] CompareError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Capability interface every generator implements.
///
/// `check_card` must be able to verify an answer from the card id alone
/// plus whatever the store holds; no per-request state survives between
/// dealing and checking.
#[async_trait]
pub trait CardGenerator: Send + Sync {
    /// Generator identifier, as referenced by `Collection::generator`.
    fn name(&self) -> &'static str;

    /// Deal a card from the collection.
    async fn get_card(
        &self,
        store: &dyn CardStore,
        collection: &Collection,
    ) -> Result<GeneratedCard, GeneratorError>;

    /// Check a submitted answer against the card denoted by `card_id`.
    async fn check_card(
        &self,
        store: &dyn CardStore,
        collection: &Collection,
        card_id: &str,
        answer: &str,
    ) -> Result<bool, GeneratorError>;
}
