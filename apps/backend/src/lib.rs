pub mod dispatch;
pub mod error;
pub mod generators;
pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::dispatch::Dispatcher;
use crate::generators::GeneratorRegistry;
use crate::store::{CardStore, Database};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CardStore>,
    pub dispatcher: Arc<Dispatcher>,
}

/// Build the quiz API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/collections", get(routes::collections::list))
        .route("/collections/:collection_id", get(routes::collections::deal))
        .route(
            "/collections/:collection_id/check",
            post(routes::collections::check),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set");

    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let registry = GeneratorRegistry::with_builtins();
    tracing::info!("Registered generators: {}", registry.names().join(", "));

    let state = AppState {
        store: Arc::new(db),
        dispatcher: Arc::new(Dispatcher::new(registry)),
    };

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
