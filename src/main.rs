use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::{Parser, Subcommand};
use log::{info, warn};

use plum_rules::game_state::game_state::{GameState, GameStatus};
use plum_rules::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_rules::move_generation::perft::perft;
use plum_rules::utils::long_algebraic::long_algebraic_to_move;
use plum_rules::utils::random_playout::{random_playout, PlayoutConfig};
use plum_rules::utils::render_game_state::render_game_state;

const LOG_ENV: &str = "PLUM_RULES_LOG";

#[derive(Parser, Debug)]
#[command(name = "plum_rules", version, about = "Legal move generation and play for standard chess")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play both sides from stdin: a move like e2e4, or undo, moves, board, quit
    Play,

    /// Count leaf positions from the start position
    Perft {
        #[arg(short, long, default_value_t = 4)]
        depth: u8,
    },

    /// Play uniformly random legal moves from the start position
    Random {
        #[arg(short, long, default_value_t = PlayoutConfig::default().seed)]
        seed: u64,

        #[arg(short = 'p', long, default_value_t = PlayoutConfig::default().max_plies)]
        max_plies: usize,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, "info")).init();

    let args = Args::parse();
    match args.command {
        Command::Play => run_play(),
        Command::Perft { depth } => run_perft(depth),
        Command::Random { seed, max_plies } => run_random(PlayoutConfig { max_plies, seed }),
    }
}

fn run_play() -> Result<(), Box<dyn Error>> {
    let mut game = GameState::new_game();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", render_game_state(&game));
    prompt(&mut stdout, &game)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "board" => println!("{}", render_game_state(&game)),
            "moves" => {
                let moves: Vec<String> = game.legal_moves().iter().map(|mv| mv.to_string()).collect();
                println!("{}", moves.join(" "));
            }
            "undo" => match game.undo_move() {
                Some(mv) => {
                    println!("took back {mv}");
                    println!("{}", render_game_state(&game));
                }
                None => println!("nothing to undo"),
            },
            text => {
                let legal = game.legal_moves();
                match long_algebraic_to_move(text, &legal) {
                    Ok(mv) => {
                        game.apply_move(&mv);
                        println!("{}", render_game_state(&game));
                        report_status(&mut game);
                    }
                    Err(err) => warn!("{err}"),
                }
            }
        }
        prompt(&mut stdout, &game)?;
    }

    Ok(())
}

fn prompt(stdout: &mut io::Stdout, game: &GameState) -> io::Result<()> {
    write!(stdout, "{:?} to move> ", game.side_to_move())?;
    stdout.flush()
}

fn report_status(game: &mut GameState) {
    match game.status() {
        GameStatus::Checkmate { winner } => println!("checkmate, {winner:?} wins"),
        GameStatus::Stalemate => println!("stalemate"),
        GameStatus::Ongoing if game.is_in_check() => println!("check"),
        GameStatus::Ongoing => {}
    }
}

fn run_perft(depth: u8) -> Result<(), Box<dyn Error>> {
    let mut game = GameState::new_game();
    let started = Instant::now();
    let counts = perft(&LegalMoveGenerator, &mut game, depth);
    let elapsed = started.elapsed();

    println!("depth {depth}: {counts:?}");
    let nps = counts.nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    info!("perft finished in {:.3}s ({nps:.0} nodes/s)", elapsed.as_secs_f64());
    Ok(())
}

fn run_random(config: PlayoutConfig) -> Result<(), Box<dyn Error>> {
    let mut game = GameState::new_game();
    let report = random_playout(&mut game, &config);

    println!("{}", report.moves.join(" "));
    println!("{}", render_game_state(&game));
    println!("{:?} after {} plies", report.outcome, report.moves.len());
    Ok(())
}
