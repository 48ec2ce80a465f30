use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Single history record pushed by `apply_move` and popped by `undo_move`.
///
/// Holds the move as it was applied (captured piece resolved) together with
/// the castling rights and en-passant target that were current before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
}
