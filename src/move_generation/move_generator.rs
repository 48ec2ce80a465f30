use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

/// A source of legal moves for the side to move.
///
/// Implementations may mutate `game_state` while they work but must hand it
/// back exactly as they found it.
pub trait MoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<Move>;
}
