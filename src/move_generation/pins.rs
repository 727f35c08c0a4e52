//! Pin detection by scanning the eight rays leaving the king.
//!
//! On each ray the first occupant is a pin candidate when it is friendly. If
//! the next occupant further out is an enemy slider that moves along that
//! ray (rook or queen orthogonally, bishop or queen diagonally) the candidate
//! is pinned and may only move along the ray, up to and including the pinner.

use log::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square, SquareSet, Team};
use crate::moves::rays::{ray, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    /// The friendly piece that must stay on the ray.
    pub pinned: Square,
    pub pinner: Square,
    pub direction: Direction,
    /// Squares strictly between king and pinner, plus the pinner's square.
    pub allowed: SquareSet,
}

/// All pins against `team`'s king. Empty when `team` has no king.
pub fn pins(board: &Board, team: Team) -> Vec<Pin> {
    let Some(king) = board.king_square(team) else {
        return Vec::new();
    };

    let pins: Vec<Pin> = Direction::ALL
        .into_iter()
        .filter_map(|direction| pin_on_ray(board, team, king, direction))
        .collect();
    if !pins.is_empty() {
        debug!("{team:?} king on {king} has pins {pins:?}");
    }
    pins
}

fn pin_on_ray(board: &Board, team: Team, king: Square, direction: Direction) -> Option<Pin> {
    let line = ray(king, direction);
    let mut occupied = line
        .iter()
        .enumerate()
        .filter_map(|(index, &square)| board.piece_at(square).map(|piece| (index, piece)));

    let (_, candidate) = occupied.next()?;
    if !candidate.is_friend_of(team) {
        return None;
    }
    let (pinner_index, pinner) = occupied.next()?;
    if !pinner.is_enemy_of(team) || !slides_along(pinner.kind(), direction) {
        return None;
    }

    Some(Pin {
        pinned: candidate.square()?,
        pinner: pinner.square()?,
        direction,
        allowed: line[..=pinner_index].iter().collect(),
    })
}

fn slides_along(kind: PieceKind, direction: Direction) -> bool {
    match kind {
        PieceKind::Queen => true,
        PieceKind::Rook => !direction.is_diagonal(),
        PieceKind::Bishop => direction.is_diagonal(),
        _ => false,
    }
}
