//! Helpers shared by the per-piece generators.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;
use crate::moves::directions::{on_axis, Direction};

/// Walk each direction from `from` until blocked, emitting quiet moves and the
/// first enemy capture. With a pin, only directions on the pin axis are walked.
pub(crate) fn generate_sliding_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        if let Some(axis) = pin {
            if !on_axis(direction, axis) {
                continue;
            }
        }

        let mut cursor = from;
        while let Some(next) = cursor.offset(direction.0, direction.1) {
            match game_state.piece_at(next) {
                None => out.push(Move::new(from, next, piece, game_state.board())),
                Some(other) => {
                    if other.color != piece.color {
                        out.push(Move::new(from, next, piece, game_state.board()));
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}

/// Piece of the side to move standing on `square`.
#[inline]
pub(crate) fn own_piece_on(game_state: &GameState, square: Square) -> Option<Piece> {
    game_state
        .piece_at(square)
        .filter(|piece| piece.color == game_state.side_to_move())
}
