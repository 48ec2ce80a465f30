//! Queen move generation: the rook pattern followed by the bishop pattern,
//! both honoring the same pin.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::Pin;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

pub fn generate_queen_moves(game_state: &GameState, from: Square, pins: &[Pin], out: &mut Vec<Move>) {
    generate_rook_moves(game_state, from, pins, out);
    generate_bishop_moves(game_state, from, pins, out);
}
