//! Minimax-Four: a Connect-Four engine.
//!
//! ## Usage
//!
//! - `minimax-four` - Play against the engine in the terminal
//! - `minimax-four play --engine-first` - Let the engine open
//! - `minimax-four protocol` - Start the line-based engine protocol
//! - `minimax-four selfplay --games 20` - Pit the engine against a random player

use std::io;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use minimax_four::arena::{Opponent, play_match};
use minimax_four::board::Player;
use minimax_four::config::EngineConfig;
use minimax_four::console::run_console;
use minimax_four::constants::{MAX_DEPTH, SEARCH_DEPTH};
use minimax_four::eval::EvaluatorKind;
use minimax_four::game::Game;
use minimax_four::protocol::Engine;
use minimax_four::search::Algorithm;

/// Minimax-Four: a Connect-Four minimax engine
#[derive(Parser)]
#[command(name = "minimax-four")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct EngineArgs {
    /// Search depth in plies
    #[arg(long, global = true, default_value_t = SEARCH_DEPTH,
          value_parser = clap::value_parser!(u32).range(1..=MAX_DEPTH as i64))]
    depth: u32,

    /// Search algorithm
    #[arg(long, global = true, value_enum, default_value_t = Algorithm::AlphaBeta)]
    algorithm: Algorithm,

    /// Position evaluation heuristic
    #[arg(long, global = true, value_enum, default_value_t = EvaluatorKind::Window)]
    evaluator: EvaluatorKind,
}

impl EngineArgs {
    fn config(&self) -> Result<EngineConfig> {
        Ok(EngineConfig::new(self.depth, self.algorithm, self.evaluator)?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine in the terminal
    Play {
        /// Let the engine make the first move
        #[arg(long)]
        engine_first: bool,
    },
    /// Speak the line-based engine protocol on stdin/stdout
    Protocol,
    /// Play the engine against a random opponent
    Selfplay {
        /// Number of games to play
        #[arg(long, default_value_t = 10)]
        games: u32,
        /// Seed for the random opponent
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.engine.config()?;

    match cli.command.unwrap_or(Commands::Play {
        engine_first: false,
    }) {
        Commands::Play { engine_first } => {
            let human = if engine_first { Player::Two } else { Player::One };
            let stdin = io::stdin();
            run_console(stdin.lock(), io::stdout(), &config, human, Game::new())?;
        }
        Commands::Protocol => {
            let mut engine = Engine::new(config);
            let stdin = io::stdin();
            engine.run(stdin.lock(), io::stdout())?;
        }
        Commands::Selfplay { games, seed } => {
            let report = play_match(&config, &Opponent::Random, games, seed)?;
            println!("{report}");
        }
    }

    Ok(())
}
