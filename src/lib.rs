//! Crate root module declarations for the Plum Rules chess engine.
//!
//! This file exposes the board model, the legal move pipeline (check and pin
//! analysis, per-piece generators, apply/undo, perft) and the text helpers so
//! the binary, benches and external tooling can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    #[allow(clippy::module_inception)]
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod directions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod long_algebraic;
    pub mod random_playout;
    pub mod render_game_state;
}
