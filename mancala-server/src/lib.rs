//! Mancala Server - HTTP interface
//!
//! This crate provides the web frontend for the rules engine:
//! - Server-rendered board pages driven by plain links
//! - Move application with redirect-after-move
//! - A small JSON API for status and board state

mod error;
mod render;
mod routes;
mod state;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;

use mancala_core::GameConfig;

pub use error::ApiError;
pub use state::{ServerState, StoreError};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub game: GameConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            game: GameConfig::default(),
        }
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        // Pages
        .route("/", get(routes::board::index))
        .route("/board", get(routes::board::board_page))
        .route("/apply", get(routes::apply::apply_move))
        // JSON API
        .route("/api/status", get(routes::status::status_handler))
        .route("/api/board/:id", get(routes::board::get_board))
        // Shared state
        .with_state(state)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new(config.game));
    let router = create_router(state);

    tracing::info!("Mancala server starting on http://0.0.0.0:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
