//! Minimax-Four: a Connect-Four engine built on fixed-depth minimax search.
//!
//! The engine picks a column for the side to move by searching the game
//! tree a fixed number of plies deep, with or without alpha-beta pruning,
//! and scoring the positions at the cutoff with a static heuristic.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, search depth and heuristic weights
//! - [`board`] - 6x7 board with gravity drops
//! - [`rules`] - Four-in-a-row detection and game outcome
//! - [`eval`] - Position evaluation heuristics
//! - [`search`] - Minimax and alpha-beta search
//! - [`config`] - Engine configuration
//! - [`game`] - The live game record used by drivers
//! - [`console`] - Human versus engine on a terminal
//! - [`protocol`] - Line-based engine protocol
//! - [`arena`] - Self-play matches
//!
//! ## Example
//!
//! ```
//! use minimax_four::config::EngineConfig;
//! use minimax_four::game::Game;
//! use minimax_four::rules::Outcome;
//! use minimax_four::search::choose_move;
//!
//! let mut game = Game::new();
//! game.apply_move(3).unwrap();
//!
//! let config = EngineConfig::default();
//! let reply = choose_move(game.board(), game.to_move(), &config).unwrap();
//! assert_eq!(game.apply_move(reply), Ok(Outcome::Ongoing));
//! ```

pub mod arena;
pub mod board;
pub mod config;
pub mod console;
pub mod constants;
pub mod eval;
pub mod game;
pub mod protocol;
pub mod rules;
pub mod search;
