//! HTTP JSON API over the media shelf.
//!
//! All `/api` routes except login and `me` require a session cookie
//! obtained from `POST /api/login`.

pub mod error;
pub mod extract;
pub mod routes;
pub mod session;
pub mod wire;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::info;

use crate::core::MediaShelf;
pub use error::ApiError;
pub use session::SessionStore;
pub use wire::MediaResponse;

/// State shared across handlers.
///
/// The shelf and the session table have separate locks; handlers never
/// hold one while waiting on the other.
#[derive(Clone)]
pub struct AppState {
    pub shelf: Arc<RwLock<MediaShelf>>,
    pub sessions: Arc<RwLock<SessionStore>>,
}

impl AppState {
    pub fn new(shelf: MediaShelf) -> Self {
        Self {
            shelf: Arc::new(RwLock::new(shelf)),
            sessions: Arc::new(RwLock::new(SessionStore::new())),
        }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Auth
        .route("/api/login", post(routes::login))
        .route("/api/logout", post(routes::logout))
        .route("/api/me", get(routes::me))
        // Media
        .route("/api/media", get(routes::list_media).post(routes::create_media))
        .route("/api/media/:id", get(routes::get_media))
        .route("/api/media/:id/download", post(routes::record_access))
        // Activity & users
        .route("/api/activity", get(routes::activity))
        .route("/api/users", get(routes::users))
        // Health check
        .route("/health", get(routes::health))
        .with_state(state)
}

/// Serve the API on `bind` until Ctrl+C
pub async fn run(bind: SocketAddr, shelf: MediaShelf) -> Result<()> {
    let app = create_router(AppState::new(shelf));

    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind to {}", bind))?;

    info!("MediaShelf listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully...");
}
