//! Core value types shared by the board, the move tables and the composer.
//!
//! Squares are validated `(file, rank)` pairs, sets of squares are packed into
//! a 64-bit mask where bit `rank * 8 + file` marks membership (`a1 == 0`,
//! `h8 == 63`).

use std::fmt;

use crate::game_state::chess_errors::{ChessErrors, ChessResult};

/// Side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Team {
    White,
    Black,
}

impl Team {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Team::White => 0,
            Team::Black => 1,
        }
    }

    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Rank step a pawn of this team advances by.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }
}

/// Piece kind; the team is carried separately by `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 4,
            PieceKind::Pawn => 5,
        }
    }

    /// Unicode glyph used by board renderers.
    pub const fn glyph(self, team: Team) -> char {
        match (team, self) {
            (Team::White, PieceKind::King) => '♔',
            (Team::White, PieceKind::Queen) => '♕',
            (Team::White, PieceKind::Rook) => '♖',
            (Team::White, PieceKind::Bishop) => '♗',
            (Team::White, PieceKind::Knight) => '♘',
            (Team::White, PieceKind::Pawn) => '♙',
            (Team::Black, PieceKind::King) => '♚',
            (Team::Black, PieceKind::Queen) => '♛',
            (Team::Black, PieceKind::Rook) => '♜',
            (Team::Black, PieceKind::Bishop) => '♝',
            (Team::Black, PieceKind::Knight) => '♞',
            (Team::Black, PieceKind::Pawn) => '♟',
        }
    }
}

/// A square on the 8x8 board, zero-based on both axes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    // Field order gives the a1, b1, ..., h8 ordering of the index.
    rank: u8,
    file: u8,
}

impl Square {
    /// Builds a square from signed coordinates, rejecting anything off the board.
    pub fn new(file: i8, rank: i8) -> ChessResult<Self> {
        Self::checked(file, rank).ok_or(ChessErrors::InvalidSquare { file, rank })
    }

    /// Like `new` but for walking off the edge, where out-of-bounds is expected.
    #[inline]
    pub const fn checked(file: i8, rank: i8) -> Option<Self> {
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        }
    }

    /// Inverse of `index`; `None` for indices past 63.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index > 63 {
            None
        } else {
            Some(Square {
                rank: (index / 8) as u8,
                file: (index % 8) as u8,
            })
        }
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file as i8
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank as i8
    }

    #[inline]
    pub const fn index(self) -> usize {
        (self.rank as usize) * 8 + self.file as usize
    }

    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        Self::checked(self.file() + d_file, self.rank() + d_rank)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_char = char::from(b'a' + self.file);
        let rank_char = char::from(b'1' + self.rank);
        write!(f, "{file_char}{rank_char}")
    }
}

/// Set of squares backed by a bitboard.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square.index();
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1u64 << square.index()) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn union(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 | other.0)
    }

    #[inline]
    pub const fn intersection(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 & other.0)
    }

    #[inline]
    pub const fn difference(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 & !other.0)
    }

    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for square in iter {
            set.insert(square);
        }
        set
    }
}

impl<'a> FromIterator<&'a Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = &'a Square>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Yields squares in index order, popping the lowest bit each step.
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Square::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::{PieceKind, Square, SquareSet, Team};
    use crate::game_state::chess_errors::ChessErrors;

    #[test]
    fn team_inversion_is_total() {
        assert_eq!(Team::White.other(), Team::Black);
        assert_eq!(Team::Black.other(), Team::White);
        assert_eq!(Team::White.other().other(), Team::White);
    }

    #[test]
    fn square_rejects_out_of_bounds_coordinates() {
        assert!(matches!(
            Square::new(8, 0),
            Err(ChessErrors::InvalidSquare { file: 8, rank: 0 })
        ));
        assert!(matches!(
            Square::new(0, -1),
            Err(ChessErrors::InvalidSquare { file: 0, rank: -1 })
        ));
        let h8 = Square::new(7, 7).expect("h8 is on the board");
        assert_eq!(h8.index(), 63);
        assert_eq!(h8.to_string(), "h8");
    }

    #[test]
    fn index_round_trips_for_every_square() {
        for index in 0..64 {
            let square = Square::from_index(index).expect("index below 64");
            assert_eq!(square.index(), index);
        }
        assert!(Square::from_index(64).is_none());
    }

    #[test]
    fn square_set_iterates_in_index_order() {
        let d4 = Square::new(3, 3).expect("d4");
        let a1 = Square::new(0, 0).expect("a1");
        let set: SquareSet = [d4, a1].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![a1, d4]);
        assert!(set.difference(SquareSet::from_iter([a1])).contains(d4));
        assert!(!set.difference(SquareSet::from_iter([a1])).contains(a1));
    }

    #[test]
    fn glyphs_differ_by_team() {
        assert_eq!(PieceKind::Queen.glyph(Team::White), '♕');
        assert_eq!(PieceKind::Queen.glyph(Team::Black), '♛');
    }
}
