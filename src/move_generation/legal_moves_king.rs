//! King move and castling generation.
//!
//! Each adjacent destination is proven safe by relocating the king-square
//! cache there and re-running the check analysis. Castling requires the
//! right, the rook at home, empty squares between king and rook, and a king
//! that neither starts on nor crosses an attacked square.

use crate::game_state::chess_rules::{king_start_square, kingside_rook_home, queenside_rook_home};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{
    compute_checks_and_pins, is_square_attacked, KingSquareProbe,
};
use crate::move_generation::legal_move_generator::GenerationMode;
use crate::move_generation::legal_move_shared::own_piece_on;
use crate::moves::chess_move::Move;
use crate::moves::directions::KING_DIRECTIONS;

pub fn generate_king_moves(
    game_state: &mut GameState,
    from: Square,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    let Some(piece) = own_piece_on(game_state, from) else {
        return;
    };

    for direction in KING_DIRECTIONS {
        let Some(to) = from.offset(direction.0, direction.1) else {
            continue;
        };
        if matches!(game_state.piece_at(to), Some(other) if other.color == piece.color) {
            continue;
        }

        let safe = match mode {
            GenerationMode::Attacks => true,
            GenerationMode::Legal => {
                let probe = KingSquareProbe::new(game_state, piece.color, to);
                !compute_checks_and_pins(&probe).in_check
            }
        };
        if safe {
            out.push(Move::new(from, to, piece, game_state.board()));
        }
    }
}

/// Append castling moves for the side to move. Callers only invoke this when not in check.
pub fn generate_castling_moves(game_state: &mut GameState, king_from: Square, out: &mut Vec<Move>) {
    let Some(king) = own_piece_on(game_state, king_from) else {
        return;
    };
    let color = king.color;
    if king.kind != PieceKind::King || king_from != king_start_square(color) {
        return;
    }
    if is_square_attacked(game_state, king_from) {
        return;
    }

    let rights = game_state.castling_rights();
    let row = color.home_row();
    let rook = Some(Piece::new(color, PieceKind::Rook));

    if rights.kingside(color)
        && game_state.piece_at(kingside_rook_home(color)) == rook
        && squares_empty(game_state, row, &[5, 6])
        && squares_safe(game_state, row, &[5, 6])
    {
        out.push(Move::castle(king_from, Square::at(row, 6), king));
    }

    if rights.queenside(color)
        && game_state.piece_at(queenside_rook_home(color)) == rook
        && squares_empty(game_state, row, &[1, 2, 3])
        && squares_safe(game_state, row, &[3, 2])
    {
        out.push(Move::castle(king_from, Square::at(row, 2), king));
    }
}

fn squares_empty(game_state: &GameState, row: u8, cols: &[u8]) -> bool {
    cols.iter()
        .all(|&col| game_state.piece_at(Square::at(row, col)).is_none())
}

fn squares_safe(game_state: &mut GameState, row: u8, cols: &[u8]) -> bool {
    for &col in cols {
        if is_square_attacked(game_state, Square::at(row, col)) {
            return false;
        }
    }
    true
}
