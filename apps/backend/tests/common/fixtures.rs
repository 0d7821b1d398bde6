//! Test fixtures and factory functions for creating test data.

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use cardquiz_backend::models::{Card, Collection};
use cardquiz_core::AnswerKind;

/// Create an active collection served by the given generator.
pub fn collection(title: &str, generator: &str) -> Collection {
    Collection {
        id: Uuid::new_v4(),
        active: true,
        title: title.to_string(),
        generator: generator.to_string(),
        created_at: Utc::now(),
    }
}

/// Create an inactive collection served by the given generator.
pub fn inactive_collection(title: &str, generator: &str) -> Collection {
    Collection {
        active: false,
        ..collection(title, generator)
    }
}

/// Create a card for the collection.
pub fn card(collection_id: Uuid, front: &str, back: &str, kind: AnswerKind) -> Card {
    Card {
        id: Uuid::new_v4(),
        collection_id,
        front: front.to_string(),
        back: back.to_string(),
        answer_kind: kind,
        created_at: Utc::now(),
    }
}

/// Create a check request body.
pub fn check_request(answer: &str) -> serde_json::Value {
    json!({ "answer": answer })
}
