//! Rook move generation.
//!
//! Orthogonal slides, restricted to the pin axis when the rook is pinned.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{pin_direction, Pin};
use crate::move_generation::legal_move_shared::{generate_sliding_moves, own_piece_on};
use crate::moves::chess_move::Move;
use crate::moves::directions::ORTHOGONAL_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, from: Square, pins: &[Pin], out: &mut Vec<Move>) {
    let Some(piece) = own_piece_on(game_state, from) else {
        return;
    };
    generate_sliding_moves(
        game_state,
        from,
        piece,
        &ORTHOGONAL_DIRECTIONS,
        pin_direction(pins, from),
        out,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_stops_at_blockers_and_captures_enemies() {
        let mut game = GameState::new_empty();
        game.place_piece(Square::at(7, 0), Piece::new(Color::Light, PieceKind::Rook))
            .place_piece(Square::at(7, 3), Piece::new(Color::Light, PieceKind::King))
            .place_piece(Square::at(4, 0), Piece::new(Color::Dark, PieceKind::Pawn));

        let mut out = Vec::new();
        generate_rook_moves(&game, Square::at(7, 0), &[], &mut out);
        let targets: Vec<String> = out.iter().map(|mv| mv.algebraic_squares()).collect();
        assert_eq!(targets, vec!["a1a2", "a1a3", "a1a4", "a1b1", "a1c1"]);
        assert!(out[2].is_capture());
    }
}
