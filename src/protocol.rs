//! Line-based engine protocol modelled on the Go Text Protocol.
//!
//! Each request is one line: an optional numeric id, a command and its
//! arguments. Each response is `=[id] result` on success or `?[id] error`
//! on failure, followed by a blank line. Columns are numbered 1-7.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version` - Engine identification
//! - `list_commands`, `known_command <cmd>` - Command discovery
//! - `quit` - Exit the loop
//! - `clear_board` - Start a new game
//! - `play <column>` - Play for the side to move
//! - `genmove` - Let the engine play for the side to move; answers the column
//! - `undo` - Take back the last move
//! - `showboard` - Print the board
//! - `outcome` - `ongoing`, `win 1`, `win 2` or `draw`
//! - `analyze` - Score of every legal column for the side to move
//! - `setboard <diagram>` - Load a position, rows top first separated by `/`
//! - `depth <n>`, `algorithm <minimax|alphabeta>`, `evaluator <window|runs>` -
//!   Search settings
//!
//! ## Example
//!
//! ```
//! use minimax_four::protocol::Engine;
//!
//! let mut engine = Engine::default();
//! let input = b"play 4\ngenmove\nquit\n";
//! let mut output = Vec::new();
//! engine.run(&input[..], &mut output).unwrap();
//! assert!(String::from_utf8(output).unwrap().starts_with("= \n"));
//! ```

use std::io::{self, BufRead, Write};

use clap::ValueEnum;
use log::{debug, info};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::console::parse_column;
use crate::constants::COLS;
use crate::eval::EvaluatorKind;
use crate::game::Game;
use crate::rules::Outcome;
use crate::search::{Algorithm, choose_move, root_scores};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "algorithm",
    "analyze",
    "clear_board",
    "depth",
    "evaluator",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "outcome",
    "play",
    "protocol_version",
    "quit",
    "setboard",
    "showboard",
    "undo",
    "version",
];

/// Protocol engine state.
#[derive(Debug, Default)]
pub struct Engine {
    game: Game,
    config: EngineConfig,
}

impl Engine {
    /// Create a protocol engine with an empty board and the given settings.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    /// The game the protocol commands act on.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current search settings.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            debug!("protocol command: {command_line}");
            let (success, message) = self.execute(&command, args);

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.game = Game::new();
                (true, String::new())
            }

            "play" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Some(col) = parse_column(arg) else {
                    return (false, format!("column must be a number from 1 to {COLS}"));
                };
                match self.game.apply_move(col) {
                    Ok(_) => (true, String::new()),
                    Err(err) => (false, err.to_string()),
                }
            }

            "genmove" => {
                let player = self.game.to_move();
                let col = match choose_move(self.game.board(), player, &self.config) {
                    Ok(col) => col,
                    Err(err) => return (false, err.to_string()),
                };
                match self.game.apply_move(col) {
                    Ok(outcome) => {
                        info!("{player} plays column {} ({outcome:?})", col + 1);
                        (true, (col + 1).to_string())
                    }
                    Err(err) => (false, err.to_string()),
                }
            }

            "undo" => match self.game.undo() {
                Some(_) => (true, String::new()),
                None => (false, "no moves to undo".to_string()),
            },

            "showboard" => (true, format!("\n{}", self.game.board()).trim_end().to_string()),

            "outcome" => {
                let text = match self.game.outcome() {
                    Outcome::Ongoing => "ongoing".to_string(),
                    Outcome::Win(player) => format!("win {}", player.number()),
                    Outcome::Draw => "draw".to_string(),
                };
                (true, text)
            }

            "analyze" => {
                let scores = root_scores(self.game.board(), self.game.to_move(), &self.config);
                let text = scores
                    .iter()
                    .map(|(col, score)| format!("{}:{score}", col + 1))
                    .collect::<Vec<_>>()
                    .join(" ");
                (true, text)
            }

            "setboard" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let board = match args.join("/").parse::<Board>() {
                    Ok(board) => board,
                    Err(err) => return (false, err.to_string()),
                };
                match Game::from_board(board) {
                    Ok(game) => {
                        self.game = game;
                        (true, String::new())
                    }
                    Err(err) => (false, err.to_string()),
                }
            }

            "depth" => {
                let Some(depth) = args.first().and_then(|a| a.parse::<u32>().ok()) else {
                    return (false, "invalid depth".to_string());
                };
                match self.config.with_depth(depth) {
                    Ok(config) => {
                        self.config = config;
                        (true, String::new())
                    }
                    Err(err) => (false, err.to_string()),
                }
            }

            "algorithm" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match Algorithm::from_str(name, true) {
                    Ok(algorithm) => {
                        self.config = self.config.with_algorithm(algorithm);
                        (true, String::new())
                    }
                    Err(_) => (false, format!("unknown algorithm: {name}")),
                }
            }

            "evaluator" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match EvaluatorKind::from_str(name, true) {
                    Ok(evaluator) => {
                        self.config = self.config.with_evaluator(evaluator);
                        (true, String::new())
                    }
                    Err(_) => (false, format!("unknown evaluator: {name}")),
                }
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
