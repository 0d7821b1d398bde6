//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use cardquiz_core::{AnswerKind, GeneratedCard};

// === Database Entity Types ===

/// A collection of cards.
///
/// The collection's generator produces its members, so a collection does not
/// have to carry pre-defined cards at all (the arithmetic collections never
/// do).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Collection {
    pub id: Uuid,
    /// Whether the collection is offered in the listing endpoint.
    pub active: bool,
    pub title: String,
    /// Name of the registered generator that serves this collection.
    pub generator: String,
    pub created_at: DateTime<Utc>,
}

/// A pre-defined card belonging to a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub collection_id: Uuid,
    /// Question text shown on the front of the card.
    pub front: String,
    /// Expected answer on the back of the card.
    pub back: String,
    /// How a submitted answer is compared against `back`.
    pub answer_kind: AnswerKind,
    pub created_at: DateTime<Utc>,
}

/// Card row as stored in PostgreSQL, with the answer kind as its 3-letter
/// code column.
#[derive(Debug, Clone, FromRow)]
pub struct DbCard {
    pub id: Uuid,
    pub collection_id: Uuid,
    pub front: String,
    pub back: String,
    pub answer_kind: String,
    pub created_at: DateTime<Utc>,
}

impl DbCard {
    /// Convert to the domain card type.
    pub fn to_card(&self) -> Card {
        Card {
            id: self.id,
            collection_id: self.collection_id,
            front: self.front.clone(),
            back: self.back.clone(),
            answer_kind: AnswerKind::parse(&self.answer_kind).unwrap_or_default(),
            created_at: self.created_at,
        }
    }
}

// === API Types ===

/// Collection descriptor returned by `GET /collections`.
///
/// `card` is the endpoint that deals a card from this collection, so clients
/// never assemble URLs themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub id: String,
    pub title: String,
    pub card: String,
}

impl CollectionSummary {
    pub fn from_collection(collection: &Collection) -> Self {
        Self {
            id: collection.id.to_string(),
            title: collection.title.clone(),
            card: format!("/collections/{}", collection.id),
        }
    }
}

/// Card payload returned by `GET /collections/:collection_id`.
///
/// `check` is the answer-checking endpoint with the card id already bound
/// into the query string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealtCard {
    pub id: String,
    pub question: String,
    pub check: String,
}

impl DealtCard {
    /// Wrap a generated card with its check URL.
    ///
    /// The card id is percent-encoded with no characters exempt; arithmetic
    /// identifiers like `3+5` must survive the query string intact.
    pub fn new(collection_id: Uuid, card: GeneratedCard) -> Self {
        let check = format!(
            "/collections/{}/check?card_id={}",
            collection_id,
            urlencoding::encode(&card.id)
        );
        Self {
            id: card.id,
            question: card.question,
            check,
        }
    }
}

/// Body of `POST /collections/:collection_id/check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckCardRequest {
    pub answer: Option<String>,
}

/// Query parameters of `POST /collections/:collection_id/check`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckQuery {
    pub card_id: Option<String>,
}
