//! The piece entity.
//!
//! A live piece knows its team, kind and square. Capturing destroys it: the
//! team and square are cleared and the piece stops taking part in any board
//! logic. Equality compares `(kind, team, square)` only.

use crate::game_state::chess_errors::ChessResult;
use crate::game_state::chess_types::{PieceKind, Square, Team};
use crate::moves::move_patterns::{move_lines, MoveLine};

#[derive(Debug, Clone, Copy)]
pub struct Piece {
    kind: PieceKind,
    // `None` once destroyed.
    placement: Option<(Team, Square)>,
    has_moved: bool,
}

impl Piece {
    pub fn new(team: Team, kind: PieceKind, square: Square) -> Self {
        Self {
            kind,
            placement: Some((team, square)),
            has_moved: false,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn team(&self) -> Option<Team> {
        self.placement.map(|(team, _)| team)
    }

    #[inline]
    pub fn square(&self) -> Option<Square> {
        self.placement.map(|(_, square)| square)
    }

    /// Only tracked for kings.
    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.placement.is_none()
    }

    /// True for a live piece of `team`; destroyed pieces belong to nobody.
    #[inline]
    pub fn is_friend_of(&self, team: Team) -> bool {
        self.team() == Some(team)
    }

    /// True for a live piece of the other team.
    #[inline]
    pub fn is_enemy_of(&self, team: Team) -> bool {
        self.team() == Some(team.other())
    }

    pub fn glyph(&self) -> Option<char> {
        self.team().map(|team| self.kind.glyph(team))
    }

    /// Moves the piece to `(file, rank)` without touching any board index.
    ///
    /// Fails with `InvalidSquare` when the coordinates are off the board, in
    /// which case the piece keeps its square. Does nothing for a destroyed piece.
    pub fn set_position(&mut self, file: i8, rank: i8) -> ChessResult<()> {
        let square = Square::new(file, rank)?;
        self.set_square(square);
        Ok(())
    }

    pub(crate) fn set_square(&mut self, square: Square) {
        if let Some((_, current)) = self.placement.as_mut() {
            *current = square;
            if self.kind == PieceKind::King {
                self.has_moved = true;
            }
        }
    }

    pub fn destroy(&mut self) {
        self.placement = None;
    }

    /// Move lines from the current square; empty once destroyed.
    pub fn move_lines(&self) -> &'static [MoveLine] {
        match self.placement {
            Some((team, square)) => move_lines(self.kind, team, square),
            None => &[],
        }
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.placement == other.placement
    }
}

impl Eq for Piece {}
