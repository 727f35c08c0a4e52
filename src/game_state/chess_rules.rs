//! Canonical chess-rule constants.
//!
//! Static geometry the tables and the board setup are built from: pawn start
//! ranks, back ranks, piece offsets and the standard starting layout.

use crate::game_state::chess_types::{PieceKind, Team};

/// Unit steps of the king, also the first step of every slider ray.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Rank a team's pawns start on; only from here may they advance two squares.
#[inline]
pub const fn pawn_start_rank(team: Team) -> i8 {
    match team {
        Team::White => 1,
        Team::Black => 6,
    }
}

/// Rank a team's major pieces start on.
#[inline]
pub const fn back_rank(team: Team) -> i8 {
    match team {
        Team::White => 0,
        Team::Black => 7,
    }
}

/// Major pieces from file a to file h.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
