//! Move application with redirect-after-move
//!
//! The board page drives moves with plain hrefs, so application is a GET
//! that bounces the browser back to the board page on success.

use axum::extract::{Query, State};
use axum::response::Redirect;
use serde::Deserialize;
use std::sync::Arc;

use mancala_core::BoardId;

use crate::error::ApiError;
use crate::routes::board::resolve_player;
use crate::state::ServerState;

#[derive(Deserialize)]
pub struct ApplyParams {
    pub board_id: u64,
    pub player: Option<String>,
    pub house: usize,
}

/// Apply a house selection and redirect back to the board page
pub async fn apply_move(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<ApplyParams>,
) -> Result<Redirect, ApiError> {
    let player = resolve_player(params.player.as_deref())?;
    let board = state.apply(BoardId(params.board_id), player, params.house)?;
    tracing::info!(
        "board {}: {} sowed house {}, next {}",
        board.id,
        player,
        params.house,
        board.turn
    );
    Ok(Redirect::to(&format!(
        "/board?board_id={}&player={}",
        board.id, player
    )))
}
