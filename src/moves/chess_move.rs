//! Immutable move record produced by the legal move generator.
//!
//! A `Move` captures everything `apply_move`/`undo_move` need: both squares,
//! the moving piece, whatever it takes (resolved at generation time, so en
//! passant carries the pawn from beside the destination), and the special
//! move flags. Promotion always produces a queen, so no promotion choice is
//! stored.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::{Board, Piece, PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    is_pawn_promotion: bool,
    is_en_passant: bool,
    is_castle: bool,
}

impl Move {
    /// Ordinary move or capture; promotion is flagged when a pawn reaches its last row.
    pub(crate) fn new(start: Square, end: Square, piece_moved: Piece, board: &Board) -> Self {
        let is_pawn_promotion = piece_moved.kind == PieceKind::Pawn
            && end.row() == piece_moved.color.promotion_row();
        Self {
            start,
            end,
            piece_moved,
            piece_captured: board[end.row() as usize][end.col() as usize],
            is_pawn_promotion,
            is_en_passant: false,
            is_castle: false,
        }
    }

    /// En passant capture. The captured pawn sits on the start row, destination column.
    pub(crate) fn en_passant(start: Square, end: Square, piece_moved: Piece, board: &Board) -> Self {
        let captured_at = Square::at(start.row(), end.col());
        Self {
            start,
            end,
            piece_moved,
            piece_captured: board[captured_at.row() as usize][captured_at.col() as usize],
            is_pawn_promotion: false,
            is_en_passant: true,
            is_castle: false,
        }
    }

    /// King half of a castle; the rook relocation is implied.
    pub(crate) fn castle(start: Square, end: Square, piece_moved: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured: None,
            is_pawn_promotion: false,
            is_en_passant: false,
            is_castle: true,
        }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    #[inline]
    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    #[inline]
    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub fn is_pawn_promotion(&self) -> bool {
        self.is_pawn_promotion
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.is_castle
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Square the captured piece is removed from. Differs from `end` only for en passant.
    #[inline]
    pub fn captured_square(&self) -> Square {
        if self.is_en_passant {
            Square::at(self.start.row(), self.end.col())
        } else {
            self.end
        }
    }

    /// Start and end squares in coordinate form, e.g. `e2e4`.
    pub fn algebraic_squares(&self) -> String {
        let mut out = square_to_algebraic(self.start);
        out.push_str(&square_to_algebraic(self.end));
        out
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.is_pawn_promotion == other.is_pawn_promotion
            && self.is_en_passant == other.is_en_passant
            && self.is_castle == other.is_castle
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        self.is_pawn_promotion.hash(state);
        self.is_en_passant.hash(state);
        self.is_castle.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.algebraic_squares())?;
        if self.is_pawn_promotion {
            f.write_str("q")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    fn empty_board() -> Board {
        [[None; 8]; 8]
    }

    #[test]
    fn algebraic_squares_uses_file_and_rank() {
        let mut board = empty_board();
        let pawn = Piece::new(Color::Light, PieceKind::Pawn);
        board[6][4] = Some(pawn);
        let mv = Move::new(Square::at(6, 4), Square::at(4, 4), pawn, &board);
        assert_eq!(mv.algebraic_squares(), "e2e4");
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn pawn_reaching_last_row_is_flagged_as_promotion() {
        let mut board = empty_board();
        let pawn = Piece::new(Color::Light, PieceKind::Pawn);
        board[1][0] = Some(pawn);
        let mv = Move::new(Square::at(1, 0), Square::at(0, 0), pawn, &board);
        assert!(mv.is_pawn_promotion());
        assert_eq!(mv.to_string(), "a7a8q");
    }

    #[test]
    fn en_passant_captures_beside_destination() {
        let mut board = empty_board();
        let pawn = Piece::new(Color::Light, PieceKind::Pawn);
        board[3][4] = Some(pawn);
        board[3][3] = Some(Piece::new(Color::Dark, PieceKind::Pawn));
        let mv = Move::en_passant(Square::at(3, 4), Square::at(2, 3), pawn, &board);
        assert_eq!(mv.captured_square(), Square::at(3, 3));
        assert_eq!(
            mv.piece_captured(),
            Some(Piece::new(Color::Dark, PieceKind::Pawn))
        );
    }

    #[test]
    fn equality_ignores_recorded_pieces() {
        let mut board = empty_board();
        let knight = Piece::new(Color::Light, PieceKind::Knight);
        board[7][6] = Some(knight);
        let first = Move::new(Square::at(7, 6), Square::at(5, 5), knight, &board);
        board[5][5] = Some(Piece::new(Color::Dark, PieceKind::Pawn));
        let second = Move::new(Square::at(7, 6), Square::at(5, 5), knight, &board);
        assert_eq!(first, second);
        assert_ne!(first.piece_captured(), second.piece_captured());
    }
}
