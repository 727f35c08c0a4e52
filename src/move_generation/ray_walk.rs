//! Resolves a move line against the current occupancy.
//!
//! A line is walked from the origin outward and cut at the first occupied
//! square. What happens at that square depends on the mode:
//!
//! - `DangerZone`: the blocker's square is attacked (captured or defended),
//!   except that an enemy king does not block. The ray keeps going through
//!   it, since the king cannot hide behind itself.
//! - `Move`: a friendly blocker is unreachable, any other blocker is a
//!   potential capture and is included.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square, SquareSet, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    DangerZone,
    Move,
}

/// Reachable prefix of `line` for a `team` piece standing on `origin`.
///
/// The origin is skipped by position, so the walking piece never blocks itself.
pub fn walk_line<'a>(
    board: &Board,
    origin: Square,
    team: Team,
    line: &'a [Square],
    mode: WalkMode,
) -> &'a [Square] {
    for (index, &square) in line.iter().enumerate() {
        if square == origin {
            continue;
        }
        let Some(blocker) = board.piece_at(square) else {
            continue;
        };

        match mode {
            WalkMode::DangerZone => {
                if blocker.kind() == PieceKind::King && blocker.is_enemy_of(team) {
                    continue;
                }
                return &line[..=index];
            }
            WalkMode::Move => {
                if blocker.is_friend_of(team) {
                    return &line[..index];
                }
                return &line[..=index];
            }
        }
    }
    line
}

/// Union of the reachable prefixes of all `lines`.
pub fn walk_lines(
    board: &Board,
    origin: Square,
    team: Team,
    lines: &[Vec<Square>],
    mode: WalkMode,
) -> SquareSet {
    lines
        .iter()
        .flat_map(|line| walk_line(board, origin, team, line, mode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{walk_line, walk_lines, WalkMode};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{PieceKind, Square, Team};
    use crate::moves::move_patterns::move_lines;
    use crate::moves::rays::{ray, Direction};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn board_with(pieces: &[(&str, Team, PieceKind)]) -> Board {
        let mut board = Board::new();
        for &(name, team, kind) in pieces {
            board
                .place_algebraic(name, team, kind)
                .expect("test placement should succeed");
        }
        board
    }

    #[test]
    fn empty_line_is_walked_to_the_edge() {
        let board = Board::new();
        let line = ray(sq("a1"), Direction::Up);
        let walked = walk_line(&board, sq("a1"), Team::White, line, WalkMode::Move);
        assert_eq!(walked.len(), 7);
    }

    #[test]
    fn move_mode_excludes_friend_and_includes_enemy() {
        let board = board_with(&[
            ("a1", Team::White, PieceKind::Rook),
            ("a4", Team::White, PieceKind::Pawn),
            ("d1", Team::Black, PieceKind::Knight),
        ]);
        let up = ray(sq("a1"), Direction::Up);
        assert_eq!(
            walk_line(&board, sq("a1"), Team::White, up, WalkMode::Move),
            &[sq("a2"), sq("a3")]
        );
        let right = ray(sq("a1"), Direction::Right);
        assert_eq!(
            walk_line(&board, sq("a1"), Team::White, right, WalkMode::Move),
            &[sq("b1"), sq("c1"), sq("d1")]
        );
    }

    #[test]
    fn danger_zone_includes_defended_friend() {
        let board = board_with(&[
            ("a1", Team::White, PieceKind::Rook),
            ("a4", Team::White, PieceKind::Pawn),
        ]);
        let up = ray(sq("a1"), Direction::Up);
        assert_eq!(
            walk_line(&board, sq("a1"), Team::White, up, WalkMode::DangerZone),
            &[sq("a2"), sq("a3"), sq("a4")]
        );
    }

    #[test]
    fn danger_zone_sees_through_enemy_king_only() {
        let board = board_with(&[
            ("a1", Team::White, PieceKind::Rook),
            ("a4", Team::Black, PieceKind::King),
            ("c1", Team::White, PieceKind::King),
        ]);
        let up = ray(sq("a1"), Direction::Up);
        assert_eq!(
            walk_line(&board, sq("a1"), Team::White, up, WalkMode::DangerZone).len(),
            7
        );
        // Own king still blocks.
        let right = ray(sq("a1"), Direction::Right);
        assert_eq!(
            walk_line(&board, sq("a1"), Team::White, right, WalkMode::DangerZone),
            &[sq("b1"), sq("c1")]
        );
        // Move mode stops on the enemy king.
        assert_eq!(
            walk_line(&board, sq("a1"), Team::White, up, WalkMode::Move),
            &[sq("a2"), sq("a3"), sq("a4")]
        );
    }

    #[test]
    fn rook_on_empty_d4_reaches_fourteen_squares() {
        let board = board_with(&[("d4", Team::White, PieceKind::Rook)]);
        let lines = move_lines(PieceKind::Rook, Team::White, sq("d4"));
        let reach = walk_lines(&board, sq("d4"), Team::White, lines, WalkMode::Move);
        assert_eq!(reach.len(), 14);
        assert!(!reach.contains(sq("d4")));
        assert!(reach.iter().all(|s| s.file() == 3 || s.rank() == 3));
    }
}
