//! Server state: game configuration and the in-memory board store
//!
//! The store owns the whole load -> apply -> persist cycle for a move.
//! Applying runs under the write lock, so two concurrent moves on the
//! same board can never race on a stale copy.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use mancala_core::{apply_move, Board, BoardId, GameConfig, GameError, Player};

/// A failed request against the store
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("board {0} not found")]
    NotFound(BoardId),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Server-wide shared state
pub struct ServerState {
    config: GameConfig,
    boards: RwLock<HashMap<BoardId, Board>>,
    next_id: AtomicU64,
}

impl ServerState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            boards: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of boards currently stored
    pub fn board_count(&self) -> usize {
        self.boards.read().unwrap().len()
    }

    /// Create and persist a fresh board
    pub fn create_board(&self) -> Board {
        let id = BoardId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let board = Board::new(id, &self.config);
        self.boards.write().unwrap().insert(id, board.clone());
        board
    }

    /// Fetch a persisted board
    pub fn board(&self, id: BoardId) -> Result<Board, StoreError> {
        self.boards
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Load the board, apply the move, persist the result.
    ///
    /// A rejected move leaves the stored board untouched; the write is
    /// unconditional after a successful apply.
    pub fn apply(&self, id: BoardId, player: Player, house: usize) -> Result<Board, StoreError> {
        let mut boards = self.boards.write().unwrap();
        let board = boards.get(&id).ok_or(StoreError::NotFound(id))?;
        let next = apply_move(board, player, house)?;
        boards.insert(id, next.clone());
        Ok(next)
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
