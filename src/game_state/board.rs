//! Sparse board: live pieces keyed by square plus a king-square cache.
//!
//! The board only does bookkeeping. `place` is for setting up a position and
//! refuses to overwrite; `move_piece` relocates unconditionally and captures
//! whatever stands on the destination. Legality lives in `move_generation`.

use std::collections::BTreeMap;

use log::trace;

use crate::game_state::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{back_rank, pawn_start_rank, BACK_RANK_LAYOUT};
use crate::game_state::chess_types::{PieceKind, Square, SquareSet, Team};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks;
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Default)]
pub struct Board {
    occupancy: BTreeMap<Square, Piece>,
    king_squares: [Option<Square>; 2],
    en_passant_target: Option<Square>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard starting position.
    pub fn standard() -> Self {
        let mut board = Self::new();
        for team in [Team::White, Team::Black] {
            for (file, kind) in (0i8..).zip(BACK_RANK_LAYOUT) {
                board.place_unchecked(file, back_rank(team), team, kind);
                board.place_unchecked(file, pawn_start_rank(team), team, PieceKind::Pawn);
            }
        }
        board
    }

    fn place_unchecked(&mut self, file: i8, rank: i8, team: Team, kind: PieceKind) {
        if let Some(square) = Square::checked(file, rank) {
            if kind == PieceKind::King {
                self.king_squares[team.index()] = Some(square);
            }
            let piece = Piece::new(team, kind, square);
            self.occupancy.insert(square, piece);
        }
    }

    /// Puts a new piece on an empty square. Setup only; play uses `move_piece`.
    pub fn place(&mut self, square: Square, team: Team, kind: PieceKind) -> ChessResult<()> {
        if self.occupancy.contains_key(&square) {
            return Err(ChessErrors::OccupiedSquare(square));
        }
        if kind == PieceKind::King && self.king_squares[team.index()].is_some() {
            return Err(ChessErrors::KingAlreadyPlaced(team));
        }

        trace!("placing {team:?} {kind:?} on {square}");
        if kind == PieceKind::King {
            self.king_squares[team.index()] = Some(square);
        }
        let piece = Piece::new(team, kind, square);
        self.occupancy.insert(square, piece);
        Ok(())
    }

    /// `place` with the square given in algebraic notation, e.g. `"c4"`.
    pub fn place_algebraic(
        &mut self,
        square: &str,
        team: Team,
        kind: PieceKind,
    ) -> ChessResult<()> {
        let square = algebraic_to_square(square)?;
        self.place(square, team, kind)
    }

    /// Relocates the piece on `from` to `to` without any legality check.
    ///
    /// A piece already on `to` is destroyed and returned. Fails only when
    /// `from` is empty, and then leaves the board untouched.
    pub fn move_piece(&mut self, from: Square, to: Square) -> ChessResult<Option<Piece>> {
        if !self.occupancy.contains_key(&from) {
            return Err(ChessErrors::EmptySquare(from));
        }
        if from == to {
            return Ok(None);
        }

        let captured = self.occupancy.remove(&to).map(|mut victim| {
            if victim.kind() == PieceKind::King {
                if let Some(team) = victim.team() {
                    self.king_squares[team.index()] = None;
                }
            }
            trace!("{:?} on {to} captured", victim.kind());
            victim.destroy();
            victim
        });

        let Some(mut piece) = self.occupancy.remove(&from) else {
            return Err(ChessErrors::EmptySquare(from));
        };
        piece.set_square(to);
        if piece.kind() == PieceKind::King {
            if let Some(team) = piece.team() {
                self.king_squares[team.index()] = Some(to);
            }
        }
        trace!("moved {:?} {from} -> {to}", piece.kind());
        self.occupancy.insert(to, piece);

        Ok(captured)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.occupancy.get(&square)
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupancy.contains_key(&square)
    }

    /// All live pieces keyed by their square.
    #[inline]
    pub fn pieces(&self) -> &BTreeMap<Square, Piece> {
        &self.occupancy
    }

    pub fn pieces_of(&self, team: Team) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.occupancy
            .iter()
            .filter(move |(_, piece)| piece.is_friend_of(team))
            .map(|(square, piece)| (*square, piece))
    }

    #[inline]
    pub fn king_square(&self, team: Team) -> Option<Square> {
        self.king_squares[team.index()]
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Square a pawn may capture onto en passant, as tracked by the caller.
    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    /// Squares attacked by `team`, see `legal_move_checks::danger_zone`.
    pub fn danger_zone(&self, team: Team) -> SquareSet {
        legal_move_checks::danger_zone(self, team)
    }

    pub fn is_in_check(&self, team: Team) -> bool {
        legal_move_checks::is_in_check(self, team, None)
    }

    /// Check test against an already computed danger zone of `team.other()`.
    pub fn is_in_check_with(&self, team: Team, enemy_danger_zone: SquareSet) -> bool {
        legal_move_checks::is_in_check(self, team, Some(enemy_danger_zone))
    }
}
