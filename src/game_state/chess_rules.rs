//! Canonical chess-rule constants.
//!
//! Starting layout and the fixed squares castling depends on.

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Back-rank piece order from column 0 to column 7.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

#[inline]
pub const fn king_start_square(color: Color) -> Square {
    Square::at(color.home_row(), KING_START_COL)
}

#[inline]
pub const fn kingside_rook_home(color: Color) -> Square {
    Square::at(color.home_row(), KINGSIDE_ROOK_COL)
}

#[inline]
pub const fn queenside_rook_home(color: Color) -> Square {
    Square::at(color.home_row(), QUEENSIDE_ROOK_COL)
}

/// Rook relocation `(from, to)` for a castle landing the king on `king_to`.
#[inline]
pub fn castle_rook_squares(color: Color, king_to: Square) -> (Square, Square) {
    let row = color.home_row();
    if king_to.col() > KING_START_COL {
        (kingside_rook_home(color), Square::at(row, king_to.col() - 1))
    } else {
        (queenside_rook_home(color), Square::at(row, king_to.col() + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn castle_rook_lands_beside_king() {
        let (from, to) = castle_rook_squares(Color::Light, Square::at(7, 6));
        assert_eq!(from, Square::at(7, 7));
        assert_eq!(to, Square::at(7, 5));

        let (from, to) = castle_rook_squares(Color::Dark, Square::at(0, 2));
        assert_eq!(from, Square::at(0, 0));
        assert_eq!(to, Square::at(0, 3));
    }
}
