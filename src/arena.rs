//! Self-play: the engine against a random player or another configuration.
//!
//! The random opponent draws uniformly among the legal columns with a
//! seeded generator, so a match is reproducible from its seed.

use std::fmt;

use log::{debug, info};

use crate::board::{Board, Player};
use crate::config::EngineConfig;
use crate::game::{Game, GameError};
use crate::rules::Outcome;
use crate::search::{EngineError, choose_move};

/// Failure while playing out a match.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Who the engine plays against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    /// Uniformly random legal columns
    Random,
    /// A second engine with its own configuration
    Engine(EngineConfig),
}

/// Results from the engine's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchReport {
    /// Number of finished games recorded.
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Add a finished game in which the engine played `engine_side`.
    pub fn record(&mut self, outcome: Outcome, engine_side: Player) {
        match outcome {
            Outcome::Win(player) if player == engine_side => self.wins += 1,
            Outcome::Win(_) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: {} wins, {} losses, {} draws",
            self.games(),
            self.wins,
            self.losses,
            self.draws
        )
    }
}

/// Pick a legal column uniformly at random.
pub fn random_column(board: &Board, rng: &mut fastrand::Rng) -> Option<usize> {
    let legal: Vec<usize> = board.legal_columns().collect();
    if legal.is_empty() {
        return None;
    }
    Some(legal[rng.usize(..legal.len())])
}

/// Play one full game with the engine as `engine_side`.
pub fn play_game(
    engine: &EngineConfig,
    opponent: &Opponent,
    engine_side: Player,
    rng: &mut fastrand::Rng,
) -> Result<Game, ArenaError> {
    let mut game = Game::new();
    while !game.outcome().is_over() {
        let mover = game.to_move();
        let col = if mover == engine_side {
            choose_move(game.board(), mover, engine)?
        } else {
            match opponent {
                Opponent::Random => {
                    random_column(game.board(), rng).ok_or(EngineError::GameOver)?
                }
                Opponent::Engine(config) => choose_move(game.board(), mover, config)?,
            }
        };
        game.apply_move(col)?;
    }
    Ok(game)
}

/// Play `games` games, alternating which side the engine takes.
pub fn play_match(
    engine: &EngineConfig,
    opponent: &Opponent,
    games: u32,
    seed: u64,
) -> Result<MatchReport, ArenaError> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut report = MatchReport::default();
    for i in 0..games {
        let engine_side = if i % 2 == 0 { Player::One } else { Player::Two };
        let game = play_game(engine, opponent, engine_side, &mut rng)?;
        debug!(
            "game {}: engine as {engine_side}, {:?} after {} moves",
            i + 1,
            game.outcome(),
            game.history().len()
        );
        report.record(game.outcome(), engine_side);
    }
    info!("match finished, {report}");
    Ok(report)
}
