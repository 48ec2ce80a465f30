//! Uniformly random self-play.
//!
//! Drives a `GameState` with random picks from `legal_moves()` until the game
//! ends or a ply cap is hit. Used by the CLI and as a stress harness for
//! apply/undo.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub max_plies: usize,
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Checkmate { winner: Color },
    Stalemate,
    PlyLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayoutReport {
    /// Moves played, in long algebraic form.
    pub moves: Vec<String>,
    pub outcome: PlayoutOutcome,
}

/// Play random moves on `game_state`, seeding the generator from `config.seed`.
///
/// The played moves stay applied; call `undo_move` `report.moves.len()` times
/// to return to the starting position.
pub fn random_playout(game_state: &mut GameState, config: &PlayoutConfig) -> PlayoutReport {
    let mut rng = StdRng::seed_from_u64(config.seed);
    random_playout_with_rng(game_state, config.max_plies, &mut rng)
}

pub fn random_playout_with_rng<R: Rng + ?Sized>(
    game_state: &mut GameState,
    max_plies: usize,
    rng: &mut R,
) -> PlayoutReport {
    let mut moves = Vec::new();

    let outcome = loop {
        let legal = game_state.legal_moves();
        let Some(mv) = legal.choose(rng) else {
            break if game_state.is_in_check() {
                PlayoutOutcome::Checkmate {
                    winner: game_state.side_to_move().opposite(),
                }
            } else {
                PlayoutOutcome::Stalemate
            };
        };
        if moves.len() >= max_plies {
            break PlayoutOutcome::PlyLimit;
        }

        debug!("ply {}: {mv}", moves.len() + 1);
        moves.push(mv.to_string());
        game_state.apply_move(mv);
    };

    info!("random playout ended after {} plies: {outcome:?}", moves.len());
    PlayoutReport { moves, outcome }
}
