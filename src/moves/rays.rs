//! Per-square ray tables.
//!
//! Every square gets eight rays, each an ordered list of squares walking away
//! from the origin until the board edge. The diagonal rays are zipped from the
//! two orthogonal rays they lie between, so a diagonal is exactly as long as
//! the shorter of its two components. Built once and shared read-only.

use std::sync::OnceLock;

use crate::game_state::chess_types::Square;

/// The eight ray directions, orthogonals first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
            Direction::UpLeft => 4,
            Direction::UpRight => 5,
            Direction::DownLeft => 6,
            Direction::DownRight => 7,
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::UpLeft | Direction::UpRight | Direction::DownLeft | Direction::DownRight
        )
    }

    /// `(file, rank)` step of a single move along this direction.
    #[inline]
    pub const fn step(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, 1),
            Direction::UpRight => (1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (1, -1),
        }
    }
}

/// The eight rays leaving one square, indexed by `Direction::index`.
pub type SquareRays = [Vec<Square>; 8];

static RAY_TABLE: OnceLock<Vec<SquareRays>> = OnceLock::new();

/// Ray from `square` in `direction`, nearest square first.
#[inline]
pub fn ray(square: Square, direction: Direction) -> &'static [Square] {
    &ray_table()[square.index()][direction.index()]
}

#[inline]
pub fn rays_from(square: Square) -> &'static SquareRays {
    &ray_table()[square.index()]
}

fn ray_table() -> &'static Vec<SquareRays> {
    RAY_TABLE.get_or_init(generate_ray_table)
}

fn generate_ray_table() -> Vec<SquareRays> {
    Square::all().map(generate_square_rays).collect()
}

fn generate_square_rays(origin: Square) -> SquareRays {
    let up = trace_orthogonal(origin, Direction::Up);
    let down = trace_orthogonal(origin, Direction::Down);
    let left = trace_orthogonal(origin, Direction::Left);
    let right = trace_orthogonal(origin, Direction::Right);

    let up_left = zip_diagonal(&up, &left);
    let up_right = zip_diagonal(&up, &right);
    let down_left = zip_diagonal(&down, &left);
    let down_right = zip_diagonal(&down, &right);

    [
        up, down, left, right, up_left, up_right, down_left, down_right,
    ]
}

fn trace_orthogonal(origin: Square, direction: Direction) -> Vec<Square> {
    let (d_file, d_rank) = direction.step();
    let mut out = Vec::with_capacity(7);
    let mut current = origin;
    while let Some(next) = current.offset(d_file, d_rank) {
        out.push(next);
        current = next;
    }
    out
}

/// Takes the rank from the vertical ray and the file from the horizontal one.
fn zip_diagonal(vertical: &[Square], horizontal: &[Square]) -> Vec<Square> {
    vertical
        .iter()
        .zip(horizontal)
        .filter_map(|(v, h)| Square::checked(h.file(), v.rank()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ray, rays_from, Direction};
    use crate::game_state::chess_types::Square;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn orthogonal_rays_run_to_the_edge() {
        let up = ray(sq("d4"), Direction::Up);
        assert_eq!(up, &[sq("d5"), sq("d6"), sq("d7"), sq("d8")]);
        assert!(ray(sq("a1"), Direction::Left).is_empty());
        assert_eq!(ray(sq("a1"), Direction::Right).len(), 7);
    }

    #[test]
    fn diagonal_is_as_long_as_the_shorter_component() {
        let up_right = ray(sq("f2"), Direction::UpRight);
        assert_eq!(up_right, &[sq("g3"), sq("h4")]);
        let down_left = ray(sq("c7"), Direction::DownLeft);
        assert_eq!(down_left, &[sq("b6"), sq("a5")]);
    }

    #[test]
    fn rays_from_d4_cover_twenty_seven_squares() {
        let total: usize = rays_from(sq("d4")).iter().map(|r| r.len()).sum();
        assert_eq!(total, 27);
    }

    #[test]
    fn every_ray_steps_one_square_at_a_time() {
        for origin in Square::all() {
            for direction in Direction::ALL {
                let (d_file, d_rank) = direction.step();
                let mut previous = origin;
                for &square in ray(origin, direction) {
                    assert_eq!(previous.offset(d_file, d_rank), Some(square));
                    previous = square;
                }
                assert!(previous.offset(d_file, d_rank).is_none());
            }
        }
    }
}
