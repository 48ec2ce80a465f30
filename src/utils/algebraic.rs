//! Square conversions for algebraic coordinates.
//!
//! Row 0 is rank 8 and row 7 is rank 1, so `e2` is `(6, 4)`.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(text: &str) -> Result<Square, ChessError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicSquare(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicSquare(text.to_owned()));
    }

    Square::new(b'8' - rank, file - b'a')
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_and_centre_conversions() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), Square::at(0, 0));
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), Square::at(7, 7));
        assert_eq!(algebraic_to_square("e2").expect("e2 should parse"), Square::at(6, 4));
        assert_eq!(square_to_algebraic(Square::at(0, 0)), "a8");
        assert_eq!(square_to_algebraic(Square::at(7, 7)), "h1");
        assert_eq!(square_to_algebraic(Square::at(4, 4)), "e4");
    }

    #[test]
    fn every_square_survives_conversion() {
        for square in Square::all() {
            let text = square_to_algebraic(square);
            assert_eq!(algebraic_to_square(&text), Ok(square));
        }
    }

    #[test]
    fn malformed_text_is_rejected() {
        for text in ["", "e", "e9", "i4", "E4", "e44", "4e"] {
            assert_eq!(
                algebraic_to_square(text),
                Err(ChessError::InvalidAlgebraicSquare(text.to_owned()))
            );
        }
    }
}
