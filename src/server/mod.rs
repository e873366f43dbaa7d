use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::storage::SqliteStore;

pub mod routes;

/// Server state
///
/// The mutex serializes all store access; request handling is one store
/// call at a time, which is the model the rest of the system assumes.
pub struct AppState {
    pub store: Mutex<SqliteStore>,
}

/// Assemble the HTTP surface over shared state
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/search", get(routes::search))
        .route("/decks", get(routes::deck_names))
        .route(
            "/study-deck",
            get(routes::study_deck).post(routes::add_to_study_deck),
        )
        .route(
            "/study-deck/{sentence_id}",
            delete(routes::remove_from_study_deck),
        )
        .route("/study-deck/{sentence_id}/star", put(routes::set_starred))
        .route("/import", post(routes::import_csv))
        .route("/stats", get(routes::stats))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(port: u16, database_path: PathBuf) -> anyhow::Result<()> {
    let store = SqliteStore::open(&database_path)?;
    let state = Arc::new(AppState {
        store: Mutex::new(store),
    });

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);
    println!("🌐 Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
