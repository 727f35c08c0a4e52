//! Full legal move composition for one side.
//!
//! Starts from every piece's pseudo-legal set and narrows it with three
//! independent constraints:
//!
//! - the king never moves into the opposing danger zone,
//! - under a single check other pieces must capture the checker or block it,
//!   under double check only the king moves,
//! - pinned pieces stay on their pin ray.

use std::collections::BTreeMap;

use log::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square, SquareSet, Team};
use crate::move_generation::legal_move_checks::{attackers, danger_zone, Attacker};
use crate::move_generation::piece_moves::pseudo_legal_moves;
use crate::move_generation::pins::pins;

/// Destination squares per origin square of the side to move.
pub type LegalMoves = BTreeMap<Square, SquareSet>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

/// Legal destinations for every `team` piece; an empty set means that piece
/// cannot move.
pub fn legal_moves(board: &Board, team: Team) -> LegalMoves {
    let mut moves: LegalMoves = board
        .pieces_of(team)
        .map(|(square, _)| (square, pseudo_legal_moves(board, square)))
        .collect();

    let Some(king) = board.king_square(team) else {
        return moves;
    };

    if let Some(king_moves) = moves.get_mut(&king) {
        *king_moves = king_moves.difference(danger_zone(board, team.other()));
    }

    let checkers = attackers(board, team);
    match checkers.as_slice() {
        [] => {}
        [checker] => {
            let allowed = checker.resolving_squares();
            let en_passant = en_passant_capture_of(board, checker);
            for (square, targets) in moves.iter_mut() {
                if *square == king {
                    continue;
                }
                let mut piece_allowed = allowed;
                if let Some(target) = en_passant {
                    if board
                        .piece_at(*square)
                        .is_some_and(|piece| piece.kind() == PieceKind::Pawn)
                    {
                        piece_allowed.insert(target);
                    }
                }
                *targets = targets.intersection(piece_allowed);
            }
            debug!("{team:?} limited to {allowed:?} by {}", checker.square);
        }
        _ => {
            for (square, targets) in moves.iter_mut() {
                if *square != king {
                    *targets = SquareSet::EMPTY;
                }
            }
            debug!("{team:?} in double check, only the king may move");
        }
    }

    for pin in pins(board, team) {
        if let Some(targets) = moves.get_mut(&pin.pinned) {
            *targets = targets.intersection(pin.allowed);
        }
    }

    moves
}

/// Total number of legal moves for `team`.
pub fn legal_move_count(board: &Board, team: Team) -> usize {
    legal_moves(board, team)
        .values()
        .map(|targets| targets.len())
        .sum()
}

/// Whether `team`, to move, is checkmated, stalemated, in check, or neither.
pub fn game_status(board: &Board, team: Team) -> GameStatus {
    let in_check = board.is_in_check(team);
    let has_move = legal_moves(board, team)
        .values()
        .any(|targets| !targets.is_empty());
    match (in_check, has_move) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, true) => GameStatus::Ongoing,
        (false, false) => GameStatus::Stalemate,
    }
}

/// The en-passant target when the checker is the pawn that just passed it.
fn en_passant_capture_of(board: &Board, checker: &Attacker) -> Option<Square> {
    if checker.kind != PieceKind::Pawn {
        return None;
    }
    let target = board.en_passant_target()?;
    let checker_team = board.piece_at(checker.square)?.team()?;
    let behind = checker.square.offset(0, -checker_team.forward())?;
    (behind == target).then_some(target)
}
