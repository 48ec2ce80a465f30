//! In-place move application and reversal.
//!
//! `apply_move` trusts its caller: the move must come from the latest
//! `legal_moves()` of the same state. Only cheap consistency checks run, and
//! only in debug builds.

use log::trace;

use crate::game_state::chess_rules::{castle_rook_squares, kingside_rook_home, queenside_rook_home};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

pub fn apply_move(game_state: &mut GameState, mv: &Move) {
    let start = mv.start();
    let end = mv.end();
    let piece = mv.piece_moved();
    let color = piece.color;

    debug_assert_eq!(
        game_state.piece_at(start),
        Some(piece),
        "{mv} does not match the board"
    );
    debug_assert_eq!(color, game_state.side_to_move(), "{mv} moves out of turn");

    game_state.undo_stack.push(UndoState {
        mv: *mv,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
    });

    game_state.set_square(start, None);
    if mv.is_en_passant() {
        game_state.set_square(mv.captured_square(), None);
    }

    let landing = if mv.is_pawn_promotion() {
        Piece::new(color, PieceKind::Queen)
    } else {
        piece
    };
    game_state.set_square(end, Some(landing));

    if piece.kind == PieceKind::King {
        game_state.king_squares[color.index()] = end;
    }

    if mv.is_castle() {
        let (rook_from, rook_to) = castle_rook_squares(color, end);
        let rook = game_state.piece_at(rook_from);
        game_state.set_square(rook_from, None);
        game_state.set_square(rook_to, rook);
    }

    update_castling_rights(game_state, mv);

    game_state.en_passant_square = if piece.kind == PieceKind::Pawn && start.row().abs_diff(end.row()) == 2 {
        Some(Square::at((start.row() + end.row()) / 2, start.col()))
    } else {
        None
    };

    game_state.side_to_move = color.opposite();
    trace!("applied {mv} ({color:?}), {} plies", game_state.undo_stack.len());
}

/// Revert the last applied move, returning it. No-op on an empty history.
pub fn undo_move(game_state: &mut GameState) -> Option<Move> {
    let record = game_state.undo_stack.pop()?;
    let mv = record.mv;
    let piece = mv.piece_moved();
    let color = piece.color;

    // Writing back the recorded piece also reverts a promotion.
    game_state.set_square(mv.start(), Some(piece));
    game_state.set_square(mv.end(), None);
    if let Some(captured) = mv.piece_captured() {
        game_state.set_square(mv.captured_square(), Some(captured));
    }

    if piece.kind == PieceKind::King {
        game_state.king_squares[color.index()] = mv.start();
    }

    if mv.is_castle() {
        let (rook_from, rook_to) = castle_rook_squares(color, mv.end());
        let rook = game_state.piece_at(rook_to);
        game_state.set_square(rook_to, None);
        game_state.set_square(rook_from, rook);
    }

    game_state.castling_rights = record.prev_castling_rights;
    game_state.en_passant_square = record.prev_en_passant_square;
    game_state.side_to_move = color;

    trace!("undid {mv} ({color:?}), {} plies", game_state.undo_stack.len());
    Some(mv)
}

fn update_castling_rights(game_state: &mut GameState, mv: &Move) {
    let piece = mv.piece_moved();
    let rights = &mut game_state.castling_rights;

    if piece.kind == PieceKind::King {
        rights.revoke_both(piece.color);
    }

    if piece.kind == PieceKind::Rook {
        revoke_for_rook_square(rights, piece.color, mv.start());
    }

    // A rook captured on its home square takes its right with it.
    if let Some(captured) = mv.piece_captured() {
        if captured.kind == PieceKind::Rook {
            revoke_for_rook_square(rights, captured.color, mv.end());
        }
    }
}

fn revoke_for_rook_square(rights: &mut CastlingRights, color: Color, square: Square) {
    if square == kingside_rook_home(color) {
        rights.revoke_kingside(color);
    } else if square == queenside_rook_home(color) {
        rights.revoke_queenside(color);
    }
}
