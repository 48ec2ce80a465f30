//! Full legal move generation pipeline.
//!
//! Runs the check/pin analysis once, dispatches each friendly piece to its
//! generator in row-major board order, then resolves checks: a single check
//! keeps only king moves and moves that capture or block the checker; a
//! double check generates king moves alone. Castling is appended only when
//! the king is not in check.

use log::debug;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{compute_checks_and_pins, Check, Pin};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castling_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;

/// What the per-piece generators should emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Moves for the side to move, honoring pins and probing king destinations.
    Legal,
    /// Squares the side to move attacks: pawn diagonals only, no king probe, no castling.
    Attacks,
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<Move> {
        generate_legal_moves(game_state)
    }
}

pub fn generate_legal_moves(game_state: &mut GameState) -> Vec<Move> {
    let info = compute_checks_and_pins(game_state);
    let side = game_state.side_to_move();
    let king_sq = game_state.king_square(side);
    let mut moves = Vec::with_capacity(64);

    if info.is_double_check() {
        generate_king_moves(game_state, king_sq, GenerationMode::Legal, &mut moves);
    } else if let Some(check) = info.checks.first() {
        generate_pseudo_legal_moves(game_state, &info.pins, GenerationMode::Legal, &mut moves);
        let resolving = check_resolution_squares(game_state, king_sq, check);
        moves.retain(|mv| {
            mv.piece_moved().kind == PieceKind::King
                || resolving.contains(&mv.end())
                || (mv.is_en_passant() && mv.captured_square() == check.square)
        });
    } else {
        generate_pseudo_legal_moves(game_state, &info.pins, GenerationMode::Legal, &mut moves);
        generate_castling_moves(game_state, king_sq, &mut moves);
    }

    debug!(
        "{side:?} to move: {} legal moves, {} checks, {} pins",
        moves.len(),
        info.checks.len(),
        info.pins.len()
    );
    moves
}

/// Every move of the side to move's pieces, in row-major board order.
pub(crate) fn generate_pseudo_legal_moves(
    game_state: &mut GameState,
    pins: &[Pin],
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    let side = game_state.side_to_move();
    for square in Square::all() {
        let Some(piece) = game_state.piece_at(square) else {
            continue;
        };
        if piece.color != side {
            continue;
        }

        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, square, pins, mode, out),
            PieceKind::Knight => generate_knight_moves(game_state, square, pins, out),
            PieceKind::Bishop => generate_bishop_moves(game_state, square, pins, out),
            PieceKind::Rook => generate_rook_moves(game_state, square, pins, out),
            PieceKind::Queen => generate_queen_moves(game_state, square, pins, out),
            PieceKind::King => generate_king_moves(game_state, square, mode, out),
        }
    }
}

/// Squares a non-king move may land on to resolve a single check.
fn check_resolution_squares(game_state: &GameState, king_sq: Square, check: &Check) -> Vec<Square> {
    let checker = game_state.piece_at(check.square);
    if matches!(checker, Some(piece) if piece.kind == PieceKind::Knight) {
        return vec![check.square];
    }

    let mut squares = Vec::with_capacity(7);
    let mut cursor = king_sq;
    while let Some(next) = cursor.offset(check.direction.0, check.direction.1) {
        squares.push(next);
        if next == check.square {
            break;
        }
        cursor = next;
    }
    squares
}
