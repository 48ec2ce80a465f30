//! Core mutable board state.
//!
//! `GameState` owns the grid, side to move, king-square cache, castling
//! rights, en-passant target and the undo history. It is mutated in place
//! by `apply_move`/`undo_move` and is not synchronized; confine one instance
//! to one thread of control.

use crate::game_state::chess_rules::{king_start_square, BACK_RANK};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks::compute_checks_and_pins;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;

/// Result of looking at the side to move's options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    // [color]
    pub(crate) king_squares: [Square; 2],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, Light to move, all castling rights.
    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            for color in [Color::Light, Color::Dark] {
                game_state.place_piece(Square::at(color.home_row(), col), Piece::new(color, *kind));
                game_state.place_piece(
                    Square::at(color.pawn_start_row(), col),
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }
        game_state.castling_rights = CastlingRights::all();
        game_state
    }

    /// Empty board with no castling rights, for assembling custom positions.
    ///
    /// Callers must place exactly one king per color before generating moves.
    pub fn new_empty() -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move: Color::Light,
            king_squares: [king_start_square(Color::Light), king_start_square(Color::Dark)],
            castling_rights: CastlingRights::none(),
            en_passant_square: None,
            undo_stack: Vec::new(),
        }
    }

    /// Put `piece` on `square`, replacing whatever was there.
    pub fn place_piece(&mut self, square: Square, piece: Piece) -> &mut Self {
        self.set_square(square, Some(piece));
        if piece.kind == PieceKind::King {
            self.king_squares[piece.color.index()] = square;
        }
        self
    }

    pub fn clear_square(&mut self, square: Square) -> &mut Self {
        self.set_square(square, None);
        self
    }

    pub fn set_side_to_move(&mut self, color: Color) -> &mut Self {
        self.side_to_move = color;
        self
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) -> &mut Self {
        self.castling_rights = rights;
        self
    }

    pub fn set_en_passant_target(&mut self, square: Option<Square>) -> &mut Self {
        self.en_passant_square = square;
        self
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub(crate) fn set_square(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    /// Per-move history records, oldest first.
    pub fn history(&self) -> &[UndoState] {
        &self.undo_stack
    }

    pub fn move_log(&self) -> impl Iterator<Item = &Move> + '_ {
        self.undo_stack.iter().map(|record| &record.mv)
    }

    /// Rights before the first move, then after each move played.
    pub fn castling_log(&self) -> Vec<CastlingRights> {
        self.undo_stack
            .iter()
            .map(|record| record.prev_castling_rights)
            .chain(std::iter::once(self.castling_rights))
            .collect()
    }

    /// En-passant target before the first move, then after each move played.
    pub fn en_passant_log(&self) -> Vec<Option<Square>> {
        self.undo_stack
            .iter()
            .map(|record| record.prev_en_passant_square)
            .chain(std::iter::once(self.en_passant_square))
            .collect()
    }

    pub fn legal_moves(&mut self) -> Vec<Move> {
        generate_legal_moves(self)
    }

    /// Apply a move taken from the latest `legal_moves()` of this exact state.
    pub fn apply_move(&mut self, mv: &Move) {
        legal_move_apply::apply_move(self, mv);
    }

    /// Revert the last applied move. Returns `None` when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<Move> {
        legal_move_apply::undo_move(self)
    }

    pub fn is_in_check(&self) -> bool {
        compute_checks_and_pins(self).in_check
    }

    pub fn status(&mut self) -> GameStatus {
        if !self.legal_moves().is_empty() {
            GameStatus::Ongoing
        } else if self.is_in_check() {
            GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            }
        } else {
            GameStatus::Stalemate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_places_standard_setup() {
        let game = GameState::new_game();
        assert_eq!(
            game.piece_at(Square::at(7, 4)),
            Some(Piece::new(Color::Light, PieceKind::King))
        );
        assert_eq!(
            game.piece_at(Square::at(0, 3)),
            Some(Piece::new(Color::Dark, PieceKind::Queen))
        );
        for col in 0..8 {
            assert_eq!(
                game.piece_at(Square::at(6, col)),
                Some(Piece::new(Color::Light, PieceKind::Pawn))
            );
            assert_eq!(
                game.piece_at(Square::at(1, col)),
                Some(Piece::new(Color::Dark, PieceKind::Pawn))
            );
        }
        assert_eq!(game.side_to_move(), Color::Light);
        assert_eq!(game.castling_rights(), CastlingRights::all());
        assert_eq!(game.en_passant_square(), None);
        assert_eq!(game.king_square(Color::Light), Square::at(7, 4));
        assert_eq!(game.king_square(Color::Dark), Square::at(0, 4));
    }

    #[test]
    fn placing_a_king_updates_the_cache() {
        let mut game = GameState::new_empty();
        game.place_piece(Square::at(3, 3), Piece::new(Color::Dark, PieceKind::King));
        assert_eq!(game.king_square(Color::Dark), Square::at(3, 3));
    }

    #[test]
    fn logs_are_seeded_with_the_initial_snapshot() {
        let mut game = GameState::new_game();
        assert_eq!(game.castling_log().len(), 1);
        assert_eq!(game.en_passant_log(), vec![None]);

        let mv = game.legal_moves()[0];
        game.apply_move(&mv);
        assert_eq!(game.move_log().count(), 1);
        assert_eq!(game.castling_log().len(), 2);
        assert_eq!(game.en_passant_log().len(), 2);
    }

    #[test]
    fn undo_on_fresh_game_is_a_no_op() {
        let mut game = GameState::new_game();
        assert_eq!(game.undo_move(), None);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn start_position_is_ongoing() {
        let mut game = GameState::new_game();
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert!(!game.is_in_check());
    }
}
