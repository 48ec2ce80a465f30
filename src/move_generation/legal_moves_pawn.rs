//! Pawn move generation.
//!
//! Single and double advances, diagonal captures, en passant, and promotion
//! (flagged on the move; `apply_move` always promotes to a queen). In attack
//! mode only the two diagonal squares are emitted, occupied or not.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{pin_direction, Pin};
use crate::move_generation::legal_move_generator::GenerationMode;
use crate::move_generation::legal_move_shared::own_piece_on;
use crate::moves::chess_move::Move;
use crate::moves::directions::{is_orthogonal, on_axis, Direction, KING_DIRECTIONS};

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    pins: &[Pin],
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    let Some(piece) = own_piece_on(game_state, from) else {
        return;
    };
    let forward = piece.color.pawn_direction();
    let pin = pin_direction(pins, from);
    let allowed = |direction: Direction| pin.map_or(true, |axis| on_axis(direction, axis));

    if mode == GenerationMode::Legal && allowed((forward, 0)) {
        if let Some(one) = from.offset(forward, 0) {
            if game_state.piece_at(one).is_none() {
                out.push(Move::new(from, one, piece, game_state.board()));
                if from.row() == piece.color.pawn_start_row() {
                    if let Some(two) = one.offset(forward, 0) {
                        if game_state.piece_at(two).is_none() {
                            out.push(Move::new(from, two, piece, game_state.board()));
                        }
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if !allowed((forward, d_col)) {
            continue;
        }

        match mode {
            GenerationMode::Attacks => out.push(Move::new(from, to, piece, game_state.board())),
            GenerationMode::Legal => match game_state.piece_at(to) {
                Some(other) if other.color != piece.color => {
                    out.push(Move::new(from, to, piece, game_state.board()));
                }
                None if game_state.en_passant_square() == Some(to) => {
                    let captured = Square::at(from.row(), to.col());
                    if !en_passant_exposes_king(game_state, piece.color, from, to, captured) {
                        out.push(Move::en_passant(from, to, piece, game_state.board()));
                    }
                }
                _ => {}
            },
        }
    }
}

/// Whether an en passant capture would leave the mover's king on an open slider ray.
///
/// The capture empties two squares at once (the mover's start and the captured
/// pawn) which the pin scan cannot see, so the rays are re-cast with the
/// post-capture occupancy.
fn en_passant_exposes_king(
    game_state: &GameState,
    color: Color,
    from: Square,
    to: Square,
    captured: Square,
) -> bool {
    let king_sq = game_state.king_square(color);
    let occupant = |square: Square| {
        if square == from || square == captured {
            None
        } else if square == to {
            Some(Piece::new(color, PieceKind::Pawn))
        } else {
            game_state.piece_at(square)
        }
    };

    for direction in KING_DIRECTIONS {
        let mut cursor = king_sq;
        while let Some(next) = cursor.offset(direction.0, direction.1) {
            cursor = next;
            let Some(piece) = occupant(next) else {
                continue;
            };
            if piece.color != color {
                let slides_here = match piece.kind {
                    PieceKind::Rook => is_orthogonal(direction),
                    PieceKind::Bishop => !is_orthogonal(direction),
                    PieceKind::Queen => true,
                    _ => false,
                };
                if slides_here {
                    return true;
                }
            }
            break;
        }
    }
    false
}
