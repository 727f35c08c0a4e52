//! Per-square move-pattern tables for every piece kind.
//!
//! A pattern is a list of move lines, each an ordered walk away from the
//! origin. Sliders get one line per ray, the king and knight get one-square
//! lines per offset, and pawns get a single forward-advance line. Pawn capture
//! squares are kept in a separate table because they never take part in ray
//! walking.

use std::sync::OnceLock;

use crate::game_state::chess_rules::{pawn_start_rank, KING_OFFSETS, KNIGHT_OFFSETS};
use crate::game_state::chess_types::{PieceKind, Square, Team};
use crate::moves::rays::{rays_from, Direction};

pub type MoveLine = Vec<Square>;

pub const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

pub const BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownRight,
    Direction::DownLeft,
];

// King, Queen, Rook, Bishop, Knight, then one pawn slot per team.
const TABLE_SLOTS: usize = 7;

struct MoveTables {
    lines: Vec<Vec<MoveLine>>,
    pawn_captures: Vec<Vec<Square>>,
}

static MOVE_TABLES: OnceLock<MoveTables> = OnceLock::new();

/// Move lines of a `kind` piece of `team` standing on `square`.
///
/// `team` only matters for pawns.
#[inline]
pub fn move_lines(kind: PieceKind, team: Team, square: Square) -> &'static [MoveLine] {
    &move_tables().lines[table_slot(kind, team) * 64 + square.index()]
}

/// The diagonal-forward squares a pawn of `team` on `square` captures on.
#[inline]
pub fn pawn_capture_squares(team: Team, square: Square) -> &'static [Square] {
    &move_tables().pawn_captures[team.index() * 64 + square.index()]
}

/// Builds the tables if this is the first lookup. Idempotent.
pub fn warm_up() {
    move_tables();
}

fn move_tables() -> &'static MoveTables {
    MOVE_TABLES.get_or_init(generate_move_tables)
}

#[inline]
fn table_slot(kind: PieceKind, team: Team) -> usize {
    match kind {
        PieceKind::Pawn => 5 + team.index(),
        _ => kind.index(),
    }
}

fn generate_move_tables() -> MoveTables {
    let mut lines = Vec::with_capacity(TABLE_SLOTS * 64);
    for slot in 0..TABLE_SLOTS {
        for square in Square::all() {
            let pattern = match slot {
                0 => offset_lines(square, &KING_OFFSETS),
                1 => {
                    let mut queen = ray_lines(square, &ROOK_DIRECTIONS);
                    queen.extend(ray_lines(square, &BISHOP_DIRECTIONS));
                    queen
                }
                2 => ray_lines(square, &ROOK_DIRECTIONS),
                3 => ray_lines(square, &BISHOP_DIRECTIONS),
                4 => offset_lines(square, &KNIGHT_OFFSETS),
                5 => pawn_advance_lines(square, Team::White),
                _ => pawn_advance_lines(square, Team::Black),
            };
            lines.push(pattern);
        }
    }

    let mut pawn_captures = Vec::with_capacity(2 * 64);
    for team in [Team::White, Team::Black] {
        for square in Square::all() {
            pawn_captures.push(generate_pawn_captures(square, team));
        }
    }

    MoveTables {
        lines,
        pawn_captures,
    }
}

fn ray_lines(square: Square, directions: &[Direction]) -> Vec<MoveLine> {
    let rays = rays_from(square);
    directions
        .iter()
        .map(|direction| rays[direction.index()].clone())
        .collect()
}

/// One single-square line per offset that stays on the board.
fn offset_lines(square: Square, offsets: &[(i8, i8)]) -> Vec<MoveLine> {
    offsets
        .iter()
        .filter_map(|&(d_file, d_rank)| square.offset(d_file, d_rank))
        .map(|target| vec![target])
        .collect()
}

/// Single forward line: one step, plus a second step from the start rank.
fn pawn_advance_lines(square: Square, team: Team) -> Vec<MoveLine> {
    let forward = team.forward();
    let Some(one_step) = square.offset(0, forward) else {
        return Vec::new();
    };

    let mut line = vec![one_step];
    if square.rank() == pawn_start_rank(team) {
        if let Some(two_step) = square.offset(0, 2 * forward) {
            line.push(two_step);
        }
    }
    vec![line]
}

fn generate_pawn_captures(square: Square, team: Team) -> Vec<Square> {
    let forward = team.forward();
    [-1, 1]
        .into_iter()
        .filter_map(|d_file| square.offset(d_file, forward))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{move_lines, pawn_capture_squares};
    use crate::game_state::chess_types::{PieceKind, Square, SquareSet, Team};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn reach(kind: PieceKind, team: Team, square: &str) -> SquareSet {
        move_lines(kind, team, sq(square))
            .iter()
            .flatten()
            .collect()
    }

    #[test]
    fn slider_line_counts() {
        let d4 = sq("d4");
        assert_eq!(move_lines(PieceKind::Rook, Team::White, d4).len(), 4);
        assert_eq!(move_lines(PieceKind::Bishop, Team::White, d4).len(), 4);
        assert_eq!(move_lines(PieceKind::Queen, Team::White, d4).len(), 8);
        assert_eq!(reach(PieceKind::Rook, Team::White, "d4").len(), 14);
        assert_eq!(reach(PieceKind::Bishop, Team::White, "d4").len(), 13);
        assert_eq!(reach(PieceKind::Queen, Team::Black, "d4").len(), 27);
    }

    #[test]
    fn knight_and_king_lines_are_single_squares() {
        let knight = move_lines(PieceKind::Knight, Team::White, sq("b1"));
        assert!(knight.iter().all(|line| line.len() == 1));
        assert_eq!(
            reach(PieceKind::Knight, Team::White, "b1"),
            [sq("a3"), sq("c3"), sq("d2")].into_iter().collect()
        );
        assert_eq!(reach(PieceKind::King, Team::White, "a1").len(), 3);
        assert_eq!(reach(PieceKind::King, Team::White, "e4").len(), 8);
    }

    #[test]
    fn pawn_advance_depends_on_start_rank() {
        let from_start = move_lines(PieceKind::Pawn, Team::White, sq("e2"));
        assert_eq!(from_start, &[vec![sq("e3"), sq("e4")]]);
        let advanced = move_lines(PieceKind::Pawn, Team::White, sq("e3"));
        assert_eq!(advanced, &[vec![sq("e4")]]);
        let black_start = move_lines(PieceKind::Pawn, Team::Black, sq("d7"));
        assert_eq!(black_start, &[vec![sq("d6"), sq("d5")]]);
        assert!(move_lines(PieceKind::Pawn, Team::White, sq("a8")).is_empty());
    }

    #[test]
    fn pawn_captures_are_filtered_to_the_board() {
        let from_e2 = pawn_capture_squares(Team::White, sq("e2"));
        assert_eq!(from_e2, &[sq("d3"), sq("f3")]);
        assert_eq!(pawn_capture_squares(Team::White, sq("a2")), &[sq("b3")]);
        assert_eq!(pawn_capture_squares(Team::Black, sq("h7")), &[sq("g6")]);
        assert!(pawn_capture_squares(Team::Black, sq("c1")).is_empty());
    }
}
