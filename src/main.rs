//! Command-line inspector for the checkers engine.
//!
//! Prints a starting board and, for one player, every complete turn each
//! piece can play together with perft totals.

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use checkers_engine::perft::{complete_turns, Perft};
use checkers_engine::{Board, BoardConfig, CheckersResult, Player};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    One,
    Two,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::One => Player::Player1,
            Side::Two => Player::Player2,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "checkers_engine", about = "Inspect checkers move generation")]
struct Args {
    /// Number of board rows
    #[arg(long, default_value_t = 8)]
    rows: usize,

    /// Number of board columns
    #[arg(long, default_value_t = 8)]
    cols: usize,

    /// Rows filled by each player at the start
    #[arg(long, default_value_t = 3)]
    starting_rows: usize,

    /// Player whose turns are listed
    #[arg(long, value_enum, default_value_t = Side::One)]
    player: Side,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> CheckersResult<()> {
    let config = BoardConfig::new(args.rows, args.cols).with_starting_rows(args.starting_rows);
    let board = Board::with_config(&config)?;
    let player = Player::from(args.player);
    info!(rows = config.rows, cols = config.cols, ?player, "inspecting board");

    println!("{}", board);
    for (from, _) in board.pieces_of(player) {
        for turn in complete_turns(&board, from)? {
            let steps: Vec<String> = turn.iter().map(|mv| mv.to_string()).collect();
            println!("{}{}", from, steps.join(""));
        }
    }

    let stats = Perft::new().run(&board, player)?;
    println!(
        "turns: {}, captures: {}, longest chain: {}, movable pieces: {}",
        stats.nodes, stats.captures, stats.longest_chain, stats.movable_pieces
    );
    Ok(())
}
