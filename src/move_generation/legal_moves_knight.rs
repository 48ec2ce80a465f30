use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{pin_direction, Pin};
use crate::move_generation::legal_move_shared::own_piece_on;
use crate::moves::chess_move::Move;
use crate::moves::directions::KNIGHT_OFFSETS;

/// A pinned knight can never stay on its pin line, so it has no moves.
pub fn generate_knight_moves(game_state: &GameState, from: Square, pins: &[Pin], out: &mut Vec<Move>) {
    let Some(piece) = own_piece_on(game_state, from) else {
        return;
    };
    if pin_direction(pins, from).is_some() {
        return;
    }

    for offset in KNIGHT_OFFSETS {
        let Some(to) = from.offset(offset.0, offset.1) else {
            continue;
        };
        match game_state.piece_at(to) {
            Some(other) if other.color == piece.color => {}
            _ => out.push(Move::new(from, to, piece, game_state.board())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_in_corner_has_two_targets() {
        let mut game = GameState::new_empty();
        game.place_piece(Square::at(7, 0), Piece::new(Color::Light, PieceKind::Knight));

        let mut out = Vec::new();
        generate_knight_moves(&game, Square::at(7, 0), &[], &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn pinned_knight_is_frozen() {
        let mut game = GameState::new_empty();
        game.place_piece(Square::at(4, 3), Piece::new(Color::Light, PieceKind::Knight));
        let pins = [Pin {
            square: Square::at(4, 3),
            direction: (0, 1),
        }];

        let mut out = Vec::new();
        generate_knight_moves(&game, Square::at(4, 3), &pins, &mut out);
        assert!(out.is_empty());
    }
}
