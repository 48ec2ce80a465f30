//! Long algebraic move text ("e2e4", "a7a8q").
//!
//! Text is resolved against a list of legal moves rather than against the
//! board, so a successful lookup is always safe to hand to `apply_move`.

use crate::chess_errors::ChessError;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

/// Find the legal move named by `text`.
///
/// Promotions always produce a queen, so the only accepted suffix is `q`
/// and it may be omitted.
pub fn long_algebraic_to_move(text: &str, legal_moves: &[Move]) -> Result<Move, ChessError> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])
        .map_err(|_| ChessError::InvalidMoveText(text.to_owned()))?;
    let to = algebraic_to_square(&text[2..4])
        .map_err(|_| ChessError::InvalidMoveText(text.to_owned()))?;
    let promotion_suffix = match text.as_bytes().get(4) {
        None => false,
        Some(b'q' | b'Q') => true,
        Some(_) => return Err(ChessError::InvalidMoveText(text.to_owned())),
    };

    legal_moves
        .iter()
        .find(|mv| mv.start() == from && mv.end() == to)
        .filter(|mv| !promotion_suffix || mv.is_pawn_promotion())
        .copied()
        .ok_or_else(|| ChessError::MoveNotLegal(text.to_owned()))
}
