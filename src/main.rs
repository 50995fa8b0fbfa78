//! Main entry point for the terminal grid survival game.
//!
//! Parses the command line, places the player on a fresh grid and runs the turn loop
//! on stdin/stdout until the player has no legal move left.

use std::io;

use clap::Parser;
use log::error;

use config::game::{ENTITY_GEN_PER_TURN, GRID_HEIGHT, GRID_WIDTH, GameConfig, START_BUFFS};
use game::game_loop::{Session, run_game_loop};

pub mod config;
mod game;

#[derive(Parser)]
#[command(name = "grid-survival")]
#[command(about = "Survive on a grid that keeps filling up")]
struct Cli {
    /// Number of columns
    #[arg(long, default_value_t = GRID_WIDTH)]
    width: i32,

    /// Number of rows
    #[arg(long, default_value_t = GRID_HEIGHT)]
    height: i32,

    /// Common entities spawned after each turn
    #[arg(long, default_value_t = ENTITY_GEN_PER_TURN)]
    spawn_per_turn: usize,

    /// Consumable buffs placed at the start
    #[arg(long, default_value_t = START_BUFFS)]
    buffs: usize,

    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        GameConfig {
            width: cli.width,
            height: cli.height,
            entity_gen_per_turn: cli.spawn_per_turn,
            buffs: cli.buffs,
            seed: cli.seed,
        }
    }
}

fn main() {
    // Initialize logger from environment variable.
    env_logger::init();

    let config = GameConfig::from(Cli::parse());

    let result = Session::prepare(&config).and_then(|mut session| {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_game_loop(&mut session, stdin.lock(), &mut stdout)
    });

    if let Err(e) = result {
        error!("Game aborted: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
