//! Bishop move generation.
//!
//! Diagonal slides, restricted to the pin axis when the bishop is pinned.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{pin_direction, Pin};
use crate::move_generation::legal_move_shared::{generate_sliding_moves, own_piece_on};
use crate::moves::chess_move::Move;
use crate::moves::directions::DIAGONAL_DIRECTIONS;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, pins: &[Pin], out: &mut Vec<Move>) {
    let Some(piece) = own_piece_on(game_state, from) else {
        return;
    };
    generate_sliding_moves(
        game_state,
        from,
        piece,
        &DIAGONAL_DIRECTIONS,
        pin_direction(pins, from),
        out,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bishop_in_the_centre_reaches_thirteen_squares() {
        let mut game = GameState::new_empty();
        game.place_piece(Square::at(4, 3), Piece::new(Color::Light, PieceKind::Bishop));

        let mut out = Vec::new();
        generate_bishop_moves(&game, Square::at(4, 3), &[], &mut out);
        assert_eq!(out.len(), 13);
    }

    #[test]
    fn diagonally_pinned_bishop_keeps_only_its_diagonal() {
        let mut game = GameState::new_empty();
        game.place_piece(Square::at(4, 3), Piece::new(Color::Light, PieceKind::Bishop));
        let pins = [Pin {
            square: Square::at(4, 3),
            direction: (-1, 1),
        }];

        let mut out = Vec::new();
        generate_bishop_moves(&game, Square::at(4, 3), &pins, &mut out);
        assert!(out
            .iter()
            .all(|mv| (mv.end().row() as i8 - 4) == -(mv.end().col() as i8 - 3)));
        assert_eq!(out.len(), 7);
    }
}
