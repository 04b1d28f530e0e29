//! Mancala Core - rules engine
//!
//! This crate provides the core game logic:
//! - Board state (two half-boards, each with a trailing store)
//! - Move application: sowing, capture, extra turn, finish detection
//!
//! The engine is a pure function over board values. It performs no I/O
//! and holds no state; loading and persisting boards is the caller's job.

pub mod board;
pub mod game;

// Re-exports for convenient access
pub use board::{Board, BoardId, GameConfig, InvalidPlayer, Player, Turn};
pub use game::{apply_move, GameError};
