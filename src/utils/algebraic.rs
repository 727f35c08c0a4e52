//! Conversions between algebraic coordinates and zero-based squares.
//!
//! Algebraic names (`'a'..='h'`, `1..=8`) are only used at the setup boundary;
//! everything inside the engine works on `Square`. `a1` maps to `(0, 0)` and
//! `h8` to `(7, 7)`.

use crate::game_state::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    };
    let rank = rank
        .to_digit(10)
        .ok_or_else(|| ChessErrors::InvalidAlgebraic(square.to_owned()))?;

    let (file_index, rank_index) = algebraic_to_coord(file, rank as u8)
        .map_err(|_| ChessErrors::InvalidAlgebraic(square.to_owned()))?;
    Square::new(file_index, rank_index)
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// `('c', 4)` to `(2, 3)`.
pub fn algebraic_to_coord(file: char, rank: u8) -> ChessResult<(i8, i8)> {
    if !('a'..='h').contains(&file) || !(1..=8).contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(format!("{file}{rank}")));
    }
    let file_index = (file as u8 - b'a') as i8;
    let rank_index = rank as i8 - 1;
    Ok((file_index, rank_index))
}

/// `(2, 3)` to `('c', 4)`.
pub fn coord_to_algebraic(file: i8, rank: i8) -> ChessResult<(char, u8)> {
    let square = Square::new(file, rank)?;
    let file_char = char::from(b'a' + square.file() as u8);
    Ok((file_char, square.rank() as u8 + 1))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_coord, algebraic_to_square, coord_to_algebraic, square_to_algebraic};
    use crate::game_state::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_squares_convert() {
        assert_eq!(algebraic_to_coord('a', 1).expect("a1 should parse"), (0, 0));
        assert_eq!(algebraic_to_coord('h', 8).expect("h8 should parse"), (7, 7));
        assert_eq!(coord_to_algebraic(0, 0).expect("a1"), ('a', 1));
        assert_eq!(coord_to_algebraic(7, 7).expect("h8"), ('h', 8));
        assert_eq!(algebraic_to_square("h8").expect("h8").index(), 63);
    }

    #[test]
    fn every_square_round_trips() {
        for square in Square::all() {
            let (file, rank) =
                coord_to_algebraic(square.file(), square.rank()).expect("square is on the board");
            assert_eq!(
                algebraic_to_coord(file, rank).expect("converted name should parse"),
                (square.file(), square.rank())
            );
            let name = square_to_algebraic(square);
            assert_eq!(algebraic_to_square(&name).expect("own name"), square);
        }
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "e", "e44", "i1", "a0", "a9", "4e", "E4"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessErrors::InvalidAlgebraic(bad.to_owned())),
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(
            coord_to_algebraic(8, 0),
            Err(ChessErrors::InvalidSquare { file: 8, rank: 0 })
        );
    }
}
