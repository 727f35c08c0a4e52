//! Per-piece danger zones and pseudo-legal move sets.
//!
//! Kings, queens, rooks, bishops and knights all go through the uniform ray
//! walker. Pawns are special: they attack their two diagonal-forward squares
//! regardless of occupancy, capture only onto those squares, and advance only
//! onto empty squares.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square, SquareSet, Team};
use crate::game_state::piece::Piece;
use crate::move_generation::ray_walk::{walk_line, walk_lines, WalkMode};
use crate::moves::move_patterns::{move_lines, pawn_capture_squares};

/// Squares the piece on `square` attacks. Empty when the square is empty.
pub fn danger_zone_of(board: &Board, square: Square) -> SquareSet {
    let Some((piece, team)) = live_piece(board.piece_at(square)) else {
        return SquareSet::EMPTY;
    };
    let lines = piece.move_lines();
    match piece.kind() {
        PieceKind::Pawn => pawn_capture_squares(team, square).iter().collect(),
        _ => walk_lines(board, square, team, lines, WalkMode::DangerZone),
    }
}

/// Destinations of the piece on `square`, ignoring checks and pins.
pub fn pseudo_legal_moves(board: &Board, square: Square) -> SquareSet {
    let Some((piece, team)) = live_piece(board.piece_at(square)) else {
        return SquareSet::EMPTY;
    };
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(board, square, team),
        _ => walk_lines(board, square, team, piece.move_lines(), WalkMode::Move),
    }
}

/// Captures onto enemies or the en-passant target, plus the forward advance
/// up to the first occupied square.
pub fn pawn_moves(board: &Board, square: Square, team: Team) -> SquareSet {
    let en_passant = en_passant_target_for(board, team);
    let mut moves: SquareSet = pawn_capture_squares(team, square)
        .iter()
        .filter(|&&target| {
            en_passant == Some(target)
                || board
                    .piece_at(target)
                    .is_some_and(|piece| piece.is_enemy_of(team))
        })
        .collect();

    for line in move_lines(PieceKind::Pawn, team, square) {
        for &target in line {
            if board.is_occupied(target) {
                break;
            }
            moves.insert(target);
        }
    }
    moves
}

/// Squares of the enemy pieces the piece on `square` could take.
///
/// An en-passant capture lands on an empty square, so it is not listed.
pub fn capturable(board: &Board, square: Square) -> SquareSet {
    let Some(team) = board.piece_at(square).and_then(Piece::team) else {
        return SquareSet::EMPTY;
    };
    pseudo_legal_moves(board, square)
        .iter()
        .filter(|&target| {
            board
                .piece_at(target)
                .is_some_and(|piece| piece.is_enemy_of(team))
        })
        .collect()
}

/// The en-passant target, but only when an enemy pawn of `team` stands
/// right behind it.
fn en_passant_target_for(board: &Board, team: Team) -> Option<Square> {
    let target = board.en_passant_target()?;
    let passed = board.piece_at(target.offset(0, -team.forward())?)?;
    let enemy_pawn = passed.kind() == PieceKind::Pawn && passed.is_enemy_of(team);
    enemy_pawn.then_some(target)
}

/// Move-mode reach of a virtual `kind` piece of `team` standing on `square`,
/// one set per line. Used to look outward from a king.
pub(crate) fn virtual_lines<'a>(
    board: &'a Board,
    square: Square,
    team: Team,
    kind: PieceKind,
) -> impl Iterator<Item = &'static [Square]> + 'a {
    move_lines(kind, team, square)
        .iter()
        .map(move |line| walk_line(board, square, team, line, WalkMode::Move))
}

fn live_piece(piece: Option<&Piece>) -> Option<(&Piece, Team)> {
    let piece = piece?;
    Some((piece, piece.team()?))
}
