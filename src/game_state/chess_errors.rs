//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type of the crate. Only structural
//! problems are reported here: coordinates off the board, malformed algebraic
//! input, and board bookkeeping violations. Chess legality is never an error;
//! the composer answers legality questions by returning move sets.

use thiserror::Error;

use crate::game_state::chess_types::{Square, Team};

pub type ChessResult<T> = Result<T, ChessErrors>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Zero-based `(file, rank)` outside `[0,8)` on either axis.
    #[error("square ({file}, {rank}) is off the board")]
    InvalidSquare { file: i8, rank: i8 },

    /// Algebraic text that is not a file `a..h` followed by a rank `1..8`.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraic(String),

    /// `place` targeted a square that already holds a piece.
    ///
    /// Replacing a piece during play goes through `Board::move_piece`, which
    /// captures instead of failing.
    #[error("square {0} is already occupied; use move_piece to capture")]
    OccupiedSquare(Square),

    /// A move was requested from a square holding no piece.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// Each team has at most one king on the board.
    #[error("{0:?} already has a king on the board")]
    KingAlreadyPlaced(Team),
}
