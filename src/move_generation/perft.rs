use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    pub fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count the leaf moves `depth` plies below `game_state`.
///
/// The tree is walked with apply/undo on the one state, which is left as it
/// was found.
pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    perft_recurse(generator, game_state, depth, &mut counts);
    counts
}

/// Per-root-move leaf counts, in generation order. Useful when bisecting a
/// mismatch against a reference engine.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> Vec<(Move, PerftCounts)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = generator.generate_legal_moves(game_state);
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        let mut counts = PerftCounts::default();
        if depth == 1 {
            count_leaf(generator, game_state, &mv, &mut counts);
        } else {
            game_state.apply_move(&mv);
            perft_recurse(generator, game_state, depth - 1, &mut counts);
            game_state.undo_move();
        }
        out.push((mv, counts));
    }
    out
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) {
    let moves = generator.generate_legal_moves(game_state);

    if depth == 1 {
        for mv in &moves {
            count_leaf(generator, game_state, mv, counts);
        }
        return;
    }

    for mv in &moves {
        game_state.apply_move(mv);
        perft_recurse(generator, game_state, depth - 1, counts);
        game_state.undo_move();
    }
}

fn count_leaf<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    mv: &Move,
    counts: &mut PerftCounts,
) {
    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant() {
        counts.en_passant += 1;
    }
    if mv.is_castle() {
        counts.castles += 1;
    }
    if mv.is_pawn_promotion() {
        counts.promotions += 1;
    }

    game_state.apply_move(mv);
    if game_state.is_in_check() {
        counts.checks += 1;
        if generator.generate_legal_moves(game_state).is_empty() {
            counts.checkmates += 1;
        }
    }
    game_state.undo_move();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    /// Build a position from eight rank strings, rank 8 first. Uppercase is
    /// Light, lowercase Dark, `.` is empty.
    fn diagram(ranks: [&str; 8], side: Color, rights: CastlingRights) -> GameState {
        let mut game = GameState::new_empty();
        for (row, rank) in ranks.iter().enumerate() {
            assert_eq!(rank.len(), 8, "rank {rank:?} must have eight cells");
            for (col, cell) in rank.chars().enumerate() {
                if cell == '.' {
                    continue;
                }
                let color = if cell.is_ascii_uppercase() {
                    Color::Light
                } else {
                    Color::Dark
                };
                let kind = match cell.to_ascii_lowercase() {
                    'p' => PieceKind::Pawn,
                    'n' => PieceKind::Knight,
                    'b' => PieceKind::Bishop,
                    'r' => PieceKind::Rook,
                    'q' => PieceKind::Queen,
                    'k' => PieceKind::King,
                    other => panic!("unknown piece letter {other:?}"),
                };
                game.place_piece(Square::at(row as u8, col as u8), Piece::new(color, kind));
            }
        }
        game.set_side_to_move(side).set_castling_rights(rights);
        game
    }

    fn kiwipete() -> GameState {
        diagram(
            [
                "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
                "R...K..R",
            ],
            Color::Light,
            CastlingRights::all(),
        )
    }

    fn endgame_position() -> GameState {
        diagram(
            [
                "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........", "....P.P.",
                "........",
            ],
            Color::Light,
            CastlingRights::none(),
        )
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut game = GameState::new_game();
        let counts = perft(&LegalMoveGenerator, &mut game, 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_node_counts() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&LegalMoveGenerator, &mut game, 1).nodes, 20);
        assert_eq!(perft(&LegalMoveGenerator, &mut game, 2).nodes, 400);

        let depth_three = perft(&LegalMoveGenerator, &mut game, 3);
        assert_eq!(
            depth_three,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn kiwipete_node_counts() {
        let mut game = kiwipete();
        let before = game.clone();

        let depth_one = perft(&LegalMoveGenerator, &mut game, 1);
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        let depth_two = perft(&LegalMoveGenerator, &mut game, 2);
        assert_eq!(
            depth_two,
            PerftCounts {
                nodes: 2039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                promotions: 0,
                checks: 3,
                checkmates: 0,
            }
        );
        assert_eq!(game, before);
    }

    #[test]
    fn endgame_node_counts() {
        let mut game = endgame_position();
        assert_eq!(perft(&LegalMoveGenerator, &mut game, 1).nodes, 14);
        assert_eq!(perft(&LegalMoveGenerator, &mut game, 2).nodes, 191);

        let depth_three = perft(&LegalMoveGenerator, &mut game, 3);
        assert_eq!(depth_three.nodes, 2812);
        assert_eq!(depth_three.captures, 209);
        assert_eq!(depth_three.en_passant, 2);
        assert_eq!(depth_three.checks, 267);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = kiwipete();
        let divided = perft_divide(&LegalMoveGenerator, &mut game, 2);
        assert_eq!(divided.len(), 48);

        let mut total = PerftCounts::default();
        for (_, counts) in &divided {
            total.merge(*counts);
        }
        assert_eq!(total, perft(&LegalMoveGenerator, &mut game, 2));
    }
}
