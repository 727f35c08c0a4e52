//! Danger zones, check detection and checker lookup.

use log::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square, SquareSet, Team};
use crate::move_generation::piece_moves::{danger_zone_of, pseudo_legal_moves, virtual_lines};
use crate::moves::move_patterns::pawn_capture_squares;

/// Chess never has more than two pieces giving check at once.
pub const MAX_CHECKERS: usize = 2;

/// An enemy piece giving check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attacker {
    pub square: Square,
    pub kind: PieceKind,
    /// Squares on which the check can be blocked; the checker's own square for
    /// knights and pawns, which cannot be blocked.
    pub block_set: SquareSet,
}

impl Attacker {
    /// Destinations that resolve this check for a non-king piece.
    #[inline]
    pub fn resolving_squares(&self) -> SquareSet {
        let mut squares = self.block_set;
        squares.insert(self.square);
        squares
    }
}

// Virtual piece put on the king square, and the real kinds it detects.
const PROBES: [(PieceKind, &[PieceKind]); 3] = [
    (PieceKind::Rook, &[PieceKind::Rook, PieceKind::Queen]),
    (PieceKind::Bishop, &[PieceKind::Bishop, PieceKind::Queen]),
    (PieceKind::Knight, &[PieceKind::Knight]),
];

/// Union of the danger zones of every live `team` piece.
pub fn danger_zone(board: &Board, team: Team) -> SquareSet {
    board
        .pieces_of(team)
        .fold(SquareSet::EMPTY, |zone, (square, _)| {
            zone.union(danger_zone_of(board, square))
        })
}

/// Whether `team`'s king stands in the danger zone of the other team.
///
/// `enemy_danger_zone` skips recomputing the zone when the caller has it.
pub fn is_in_check(board: &Board, team: Team, enemy_danger_zone: Option<SquareSet>) -> bool {
    let Some(king) = board.king_square(team) else {
        return false;
    };
    let zone = enemy_danger_zone.unwrap_or_else(|| danger_zone(board, team.other()));
    zone.contains(king)
}

/// Enemy pieces checking `team`'s king, found by looking outward from it.
///
/// Stops after `MAX_CHECKERS` hits.
pub fn attackers(board: &Board, team: Team) -> Vec<Attacker> {
    let mut found = Vec::with_capacity(MAX_CHECKERS);
    let Some(king) = board.king_square(team) else {
        return found;
    };

    for (probe, kinds) in PROBES {
        for reach in virtual_lines(board, king, team, probe) {
            let Some(&last) = reach.last() else {
                continue;
            };
            let Some(piece) = board.piece_at(last) else {
                continue;
            };
            if !piece.is_enemy_of(team) || !kinds.contains(&piece.kind()) {
                continue;
            }

            let block_set = if probe == PieceKind::Knight {
                SquareSet::from_iter([last])
            } else {
                let line: SquareSet = reach.iter().collect();
                line.intersection(pseudo_legal_moves(board, last))
            };
            found.push(Attacker {
                square: last,
                kind: piece.kind(),
                block_set,
            });
            if found.len() == MAX_CHECKERS {
                debug!("{team:?} king on {king} is in double check");
                return found;
            }
        }
    }

    for &square in pawn_capture_squares(team, king) {
        let Some(piece) = board.piece_at(square) else {
            continue;
        };
        if piece.kind() == PieceKind::Pawn && piece.is_enemy_of(team) {
            found.push(Attacker {
                square,
                kind: PieceKind::Pawn,
                block_set: SquareSet::from_iter([square]),
            });
            if found.len() == MAX_CHECKERS {
                break;
            }
        }
    }

    if !found.is_empty() {
        debug!("{team:?} king on {king} checked by {found:?}");
    }
    found
}
