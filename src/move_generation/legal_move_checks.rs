//! Check and pin analysis for the side to move.
//!
//! `compute_checks_and_pins` casts rays out of the side-to-move's king and
//! looks up knight offsets; the generators consume its pin list and the
//! orchestrator its check list. `is_square_attacked` answers the narrower
//! castling question by generating the opponent's attacks.
//!
//! Both the king probe and the attacked-square query temporarily mutate the
//! state. The guards below restore it on drop so every exit path leaves the
//! state as it was found.

use std::ops::{Deref, DerefMut};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::{generate_pseudo_legal_moves, GenerationMode};
use crate::moves::directions::{is_orthogonal, Direction, KING_DIRECTIONS, KNIGHT_OFFSETS};

/// A friendly piece that may only move along `direction` (measured from the king).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub direction: Direction,
}

/// An enemy piece attacking the king. `direction` is the ray or knight offset from the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckInfo {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl CheckInfo {
    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() > 1
    }

    pub fn pin_direction(&self, square: Square) -> Option<Direction> {
        pin_direction(&self.pins, square)
    }
}

#[inline]
pub(crate) fn pin_direction(pins: &[Pin], square: Square) -> Option<Direction> {
    pins.iter()
        .find(|pin| pin.square == square)
        .map(|pin| pin.direction)
}

pub fn compute_checks_and_pins(game_state: &GameState) -> CheckInfo {
    let ally = game_state.side_to_move();
    let enemy = ally.opposite();
    let king_sq = game_state.king_square(ally);
    let mut info = CheckInfo::default();

    for direction in KING_DIRECTIONS {
        let mut candidate: Option<Square> = None;
        let mut cursor = king_sq;
        let mut distance = 0u8;

        while let Some(next) = cursor.offset(direction.0, direction.1) {
            cursor = next;
            distance += 1;

            let Some(piece) = game_state.piece_at(next) else {
                continue;
            };

            if piece.color == ally {
                // The king's own square is transparent while it is being probed elsewhere.
                if piece.kind == PieceKind::King {
                    continue;
                }
                if candidate.is_some() {
                    break;
                }
                candidate = Some(next);
                continue;
            }

            if attacks_along_ray(piece, direction, distance) {
                match candidate {
                    None => {
                        info.in_check = true;
                        info.checks.push(Check {
                            square: next,
                            direction,
                        });
                    }
                    Some(pinned) => info.pins.push(Pin {
                        square: pinned,
                        direction,
                    }),
                }
            }
            break;
        }
    }

    let enemy_knight = Piece::new(enemy, PieceKind::Knight);
    for offset in KNIGHT_OFFSETS {
        if let Some(square) = king_sq.offset(offset.0, offset.1) {
            if game_state.piece_at(square) == Some(enemy_knight) {
                info.in_check = true;
                info.checks.push(Check {
                    square,
                    direction: offset,
                });
            }
        }
    }

    info
}

/// Whether `piece`, found `distance` steps from the king along `direction`, hits the king.
fn attacks_along_ray(piece: Piece, direction: Direction, distance: u8) -> bool {
    match piece.kind {
        PieceKind::Rook => is_orthogonal(direction),
        PieceKind::Bishop => !is_orthogonal(direction),
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        PieceKind::Pawn => {
            distance == 1 && direction.1 != 0 && direction.0 == -piece.color.pawn_direction()
        }
        PieceKind::Knight => false,
    }
}

/// Whether the opponent of the side to move could move to `square`.
///
/// Flips the side to move for the duration of the query and restores it
/// before returning.
pub fn is_square_attacked(game_state: &mut GameState, square: Square) -> bool {
    let mut flipped = SideToMoveFlip::new(game_state);
    let mut attacks = Vec::with_capacity(64);
    generate_pseudo_legal_moves(&mut flipped, &[], GenerationMode::Attacks, &mut attacks);
    attacks.iter().any(|mv| mv.end() == square)
}

/// Flips the side to move; flips it back on drop.
pub(crate) struct SideToMoveFlip<'a> {
    game_state: &'a mut GameState,
}

impl<'a> SideToMoveFlip<'a> {
    pub(crate) fn new(game_state: &'a mut GameState) -> Self {
        game_state.side_to_move = game_state.side_to_move.opposite();
        Self { game_state }
    }
}

impl Drop for SideToMoveFlip<'_> {
    fn drop(&mut self) {
        self.game_state.side_to_move = self.game_state.side_to_move.opposite();
    }
}

impl Deref for SideToMoveFlip<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.game_state
    }
}

impl DerefMut for SideToMoveFlip<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.game_state
    }
}

/// Relocates one color's king-square cache; restores the original square on drop.
///
/// The board itself is untouched, so the king still occupies its real square
/// while the analyzer reasons from the probed one.
pub(crate) struct KingSquareProbe<'a> {
    game_state: &'a mut GameState,
    color: Color,
    original: Square,
}

impl<'a> KingSquareProbe<'a> {
    pub(crate) fn new(game_state: &'a mut GameState, color: Color, probe: Square) -> Self {
        let original = game_state.king_squares[color.index()];
        game_state.king_squares[color.index()] = probe;
        Self {
            game_state,
            color,
            original,
        }
    }
}

impl Drop for KingSquareProbe<'_> {
    fn drop(&mut self) {
        self.game_state.king_squares[self.color.index()] = self.original;
    }
}

impl Deref for KingSquareProbe<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.game_state
    }
}
