//! Board page and JSON fetch
//!
//! `GET /board` renders the requested board at its current state,
//! tailored for the requesting player. Without a `board_id` it creates
//! and persists a fresh board first.

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use mancala_core::{Board, BoardId, Player};

use crate::error::ApiError;
use crate::render;
use crate::state::ServerState;

#[derive(Deserialize)]
pub struct BoardParams {
    pub board_id: Option<u64>,
    pub player: Option<String>,
}

/// Landing page
pub async fn index() -> Html<String> {
    Html(render::index_page())
}

/// Render a board page
pub async fn board_page(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<BoardParams>,
) -> Result<Html<String>, ApiError> {
    let player = resolve_player(params.player.as_deref())?;
    let board = match params.board_id {
        Some(id) => state.board(BoardId(id))?,
        None => {
            let board = state.create_board();
            tracing::info!("created board {}", board.id);
            board
        }
    };
    Ok(Html(render::board_page(&board, player)))
}

/// Fetch a board as JSON
pub async fn get_board(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> Result<Json<Board>, ApiError> {
    Ok(Json(state.board(BoardId(id))?))
}

/// Parse an optional player label, defaulting to TOP when absent
pub(crate) fn resolve_player(label: Option<&str>) -> Result<Player, ApiError> {
    match label {
        None => Ok(Player::Top),
        Some(s) => Ok(s.parse()?),
    }
}
