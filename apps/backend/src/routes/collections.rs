//! Collection endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{CheckCardRequest, CheckQuery, CollectionSummary, DealtCard};
use crate::AppState;

/// GET /collections
///
/// Bare JSON array of active collections, each carrying the endpoint that
/// deals a card from it.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CollectionSummary>>> {
    let collections = state.store.list_active_collections().await?;

    Ok(Json(
        collections
            .iter()
            .map(CollectionSummary::from_collection)
            .collect(),
    ))
}

/// GET /collections/:collection_id
///
/// Deal a card from the collection. Inactive collections are hidden from
/// the listing but can still be dealt from when addressed directly.
pub async fn deal(
    State(state): State<AppState>,
    Path(collection_id): Path<Uuid>,
) -> Result<Json<DealtCard>> {
    let collection = state
        .store
        .find_collection(collection_id)
        .await?
        .ok_or(ApiError::CollectionNotFound(collection_id))?;

    let card = state.dispatcher.deal(state.store.as_ref(), &collection).await?;

    Ok(Json(DealtCard::new(collection_id, card)))
}

/// POST /collections/:collection_id/check?card_id=...
///
/// Returns a bare JSON boolean. Parameter presence is validated before the
/// collection lookup, so a missing parameter is always a 400 even when the
/// collection does not exist.
pub async fn check(
    State(state): State<AppState>,
    Path(collection_id): Path<Uuid>,
    Query(query): Query<CheckQuery>,
    payload: Option<Json<CheckCardRequest>>,
) -> Result<Json<bool>> {
    let card_id = query.card_id.ok_or(ApiError::MissingParameter {
        name: "card_id",
        location: "query params",
    })?;
    let answer = payload
        .and_then(|Json(body)| body.answer)
        .ok_or(ApiError::MissingParameter {
            name: "answer",
            location: "payload",
        })?;

    let collection = state
        .store
        .find_collection(collection_id)
        .await?
        .ok_or(ApiError::CollectionNotFound(collection_id))?;

    let matched = state
        .dispatcher
        .check(state.store.as_ref(), &collection, &card_id, &answer)
        .await?;

    Ok(Json(matched))
}
