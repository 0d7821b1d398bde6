//! PostgreSQL card store

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use super::{CardStore, StoreError};
use crate::models::{Card, Collection, DbCard};

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.into()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Insert a collection. Test and tooling helper; the service only reads.
    pub async fn insert_collection(&self, collection: &Collection) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO collections (id, active, title, generator, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(collection.id)
        .bind(collection.active)
        .bind(&collection.title)
        .bind(&collection.generator)
        .bind(collection.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a card. Test and tooling helper; the service only reads.
    pub async fn insert_card(&self, card: &Card) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO cards (id, collection_id, front, back, answer_kind, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(card.id)
        .bind(card.collection_id)
        .bind(&card.front)
        .bind(&card.back)
        .bind(card.answer_kind.as_str())
        .bind(card.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a collection; its cards go with it via ON DELETE CASCADE.
    pub async fn delete_collection(&self, collection_id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM collections
            WHERE id = $1
            "#,
        )
        .bind(collection_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl CardStore for Database {
    async fn list_active_collections(&self) -> Result<Vec<Collection>, StoreError> {
        let collections = sqlx::query_as::<_, Collection>(
            r#"
            SELECT id, active, title, generator, created_at
            FROM collections
            WHERE active = TRUE
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(collections)
    }

    async fn find_collection(&self, collection_id: Uuid) -> Result<Option<Collection>, StoreError> {
        let collection = sqlx::query_as::<_, Collection>(
            r#"
            SELECT id, active, title, generator, created_at
            FROM collections
            WHERE id = $1
            "#,
        )
        .bind(collection_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(collection)
    }

    async fn find_card(&self, card_id: Uuid) -> Result<Option<Card>, StoreError> {
        let card = sqlx::query_as::<_, DbCard>(
            r#"
            SELECT id, collection_id, front, back, answer_kind, created_at
            FROM cards
            WHERE id = $1
            "#,
        )
        .bind(card_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card.map(|c| c.to_card()))
    }

    async fn list_cards(&self, collection_id: Uuid) -> Result<Vec<Card>, StoreError> {
        let cards = sqlx::query_as::<_, DbCard>(
            r#"
            SELECT id, collection_id, front, back, answer_kind, created_at
            FROM cards
            WHERE collection_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(collection_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cards.iter().map(DbCard::to_card).collect())
    }
}
